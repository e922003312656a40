//! Renders the generated tables as compilable C header source. The
//! consuming encoder includes these headers at compile time, so the
//! layout of every struct and array literal here is part of the table
//! schema and kept stable.

use crate::{bc7, bt709, etc2, s3tc};

fn prologue(out: &mut String, namespace: &str) {
    out.push_str("#pragma once\n");
    out.push_str("#include <stdint.h>\n");
    out.push('\n');
    out.push_str(&format!(
        "namespace cvtt {{ namespace Tables {{ namespace {} {{\n",
        namespace
    ));
    out.push('\n');
}

fn epilogue(out: &mut String) {
    out.push_str("}}}\n");
}

fn push_bc7_table(out: &mut String, name: &str, table: &bc7::Table) {
    out.push_str(&format!("Table {}=\n", name));
    out.push_str("{\n");
    out.push_str(&format!("    {},\n", table.index));
    out.push_str(&format!("    {},\n", table.p_bits));
    out.push_str("    {\n");

    for (i, entry) in table.entries.iter().enumerate() {
        if i % 8 == 0 {
            out.push_str("        ");
        }
        out.push_str(&format!(
            "{{ {}, {}, {} }},",
            entry.min, entry.max, entry.actual_color
        ));
        if i % 8 == 7 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out.push_str("    }\n");
    out.push_str("};\n");
    out.push('\n');
}

fn push_s3tc_table(out: &mut String, name: &str, entries: &[s3tc::TableEntry; 256]) {
    out.push_str(&format!("TableEntry {}[256] =\n", name));
    out.push_str("{\n");

    for (i, entry) in entries.iter().enumerate() {
        if i % 8 == 0 {
            out.push_str("    ");
        }
        out.push_str(&format!(
            "{{ {}, {}, {}, {} }},",
            entry.min, entry.max, entry.actual_color, entry.span
        ));
        if i % 8 == 7 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out.push_str("};\n");
    out.push('\n');
}

/// Renders all 48 BC7 single-color tables.
pub fn bc7_header() -> String {
    let mut out = String::new();
    prologue(&mut out, "BC7SC");

    out.push_str("struct TableEntry\n");
    out.push_str("{\n");
    out.push_str("    uint8_t m_min;\n");
    out.push_str("    uint8_t m_max;\n");
    out.push_str("    uint8_t m_actualColor;\n");
    out.push_str("};\n");
    out.push('\n');

    out.push_str("struct Table\n");
    out.push_str("{\n");
    out.push_str("    uint8_t m_index;\n");
    out.push_str("    uint8_t m_pBits;\n");
    out.push_str("    TableEntry m_entries[256];\n");
    out.push_str("};\n");
    out.push('\n');

    for spec in bc7::TABLE_SPECS.iter() {
        push_bc7_table(&mut out, spec.name, &spec.generate());
    }

    epilogue(&mut out);
    out
}

/// Renders the eight S3TC single-color tables.
pub fn s3tc_header() -> String {
    let mut out = String::new();
    prologue(&mut out, "S3TCSC");

    out.push_str("struct TableEntry\n");
    out.push_str("{\n");
    out.push_str("    uint8_t m_min;\n");
    out.push_str("    uint8_t m_max;\n");
    out.push_str("    uint8_t m_actualColor;\n");
    out.push_str("    uint8_t m_span;\n");
    out.push_str("};\n");
    out.push('\n');

    for spec in s3tc::TABLE_SPECS.iter() {
        push_s3tc_table(&mut out, spec.name, &spec.generate());
    }

    epilogue(&mut out);
    out
}

/// Renders the ETC2 alpha rounding tables.
pub fn etc2_header() -> String {
    let mut out = String::new();
    prologue(&mut out, "ETC2");

    out.push_str(&format!(
        "const int g_alphaRoundingTableWidth = {};\n",
        etc2::ROUNDING_TABLE_WIDTH
    ));
    out.push_str(&format!(
        "const uint8_t g_alphaRoundingTables[16][{}] =\n",
        etc2::ROUNDING_TABLE_WIDTH
    ));
    out.push_str("{\n");

    for table in etc2::generate_rounding_tables().iter() {
        out.push_str("    { ");
        for (i, &index) in table.iter().enumerate() {
            if i != 0 {
                out.push_str(", ");
            }
            out.push_str(&index.to_string());
        }
        out.push_str(" },\n");
    }

    out.push_str("};\n");
    out.push('\n');

    epilogue(&mut out);
    out
}

/// Renders the FakeBT709 octant rounding table.
pub fn fake_bt709_header() -> String {
    let mut out = String::new();
    prologue(&mut out, "FakeBT709");

    out.push_str(&format!("const uint8_t g_rounding{}[] =\n", bt709::RESOLUTION));
    out.push_str("{\n");

    for (i, &octant) in bt709::generate_octant_table(bt709::RESOLUTION).iter().enumerate() {
        if i % 16 == 0 {
            out.push_str("    ");
        }
        out.push_str(&format!("{},", octant));
        if i % 16 == 15 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out.push_str("};\n");
    out.push('\n');

    epilogue(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s3tc_header_layout() {
        let header = s3tc_header();

        assert!(header.starts_with("#pragma once\n#include <stdint.h>\n"));
        assert!(header.contains("namespace cvtt { namespace Tables { namespace S3TCSC {"));
        assert!(header.contains("    uint8_t m_span;\n"));
        for spec in s3tc::TABLE_SPECS.iter() {
            assert!(
                header.contains(&format!("TableEntry {}[256] =", spec.name)),
                "{} missing",
                spec.name
            );
        }
        assert!(header.ends_with("}}}\n"));
    }

    #[test]
    fn test_etc2_header_layout() {
        let header = etc2_header();

        assert!(header.contains("namespace cvtt { namespace Tables { namespace ETC2 {"));
        assert!(header.contains("const int g_alphaRoundingTableWidth = 13;"));
        assert!(header.contains("const uint8_t g_alphaRoundingTables[16][13] =\n"));
        assert!(header.contains("    { 0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 2, 3, 3 },\n"));
        // Two from the namespace line, one per table row.
        assert_eq!(header.matches("{ ").count(), 16 + 2);
    }

    #[test]
    fn test_fake_bt709_header_layout() {
        let header = fake_bt709_header();

        assert!(header.contains("namespace cvtt { namespace Tables { namespace FakeBT709 {"));
        assert!(header.contains("const uint8_t g_rounding16[] =\n"));
        // 4096 entries, 16 per row
        assert_eq!(header.matches(',').count(), 4096);
        assert!(header.starts_with("#pragma once\n"));
        assert!(header.ends_with("}}}\n"));
    }
}
