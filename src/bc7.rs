use crate::{bits, weights};

/// Optimal quantized-and-expanded endpoint pair for one 8-bit target
/// value, plus the exact value the pair reconstructs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub min: u8,
    pub max: u8,
    pub actual_color: u8,
}

/// All 256 optimal endpoint pairs for one endpoint-width/parity/index
/// combination. `index` is the per-pixel index value the table encodes
/// for, `p_bits` packs the forced parity bits (`min | max << 1` when
/// both are independent).
pub struct Table {
    pub index: u8,
    pub p_bits: u8,
    pub entries: [TableEntry; 256],
}

/// Parameters of one named table in the emitted header.
pub struct TableSpec {
    pub name: &'static str,
    pub bits: u32,
    pub parity_bit_count: u32,
    pub parity_min: u32,
    pub parity_max: u32,
    pub weight_index: usize,
    pub max_weight_index: u32,
}

impl TableSpec {
    pub fn generate(&self) -> Table {
        generate_table(
            self.bits,
            self.parity_bit_count,
            self.parity_min,
            self.parity_max,
            self.weight_index,
            self.max_weight_index,
        )
    }
}

/// Fixed-point blend used by BC7 decoders, rounds to nearest.
pub fn interpolate(min_expanded: i32, max_expanded: i32, weight: i32) -> i32 {
    ((64 - weight) * min_expanded + weight * max_expanded + 32) >> 6
}

/// Searches every quantized endpoint pair for the one whose blend at
/// `weight_index` lands closest to each possible 8-bit target value.
///
/// `parity_bit_count` of 0 searches plain endpoints, 1 applies the same
/// forced parity bit to both endpoints, 2 means the caller fixed the
/// two bits independently to `parity_min`/`parity_max` (one table is
/// generated per combination).
pub fn generate_table(
    bits: u32,
    parity_bit_count: u32,
    parity_min: u32,
    parity_max: u32,
    weight_index: usize,
    max_weight_index: u32,
) -> Table {
    let weight = weights::table_for_max_index(max_weight_index)[weight_index] as i32;

    let ep_range = 1u32 << bits;

    // Expanded values depend only on the width and parity, so expand
    // the whole endpoint range once instead of inside the search loop.
    let expand_all = |parity: u32| -> Vec<i32> {
        (0..ep_range)
            .map(|v| {
                if parity_bit_count != 0 {
                    bits::expand_with_parity(v, bits, parity) as i32
                } else {
                    bits::expand(v, bits) as i32
                }
            })
            .collect()
    };
    let min_expanded = expand_all(parity_min);
    let max_expanded = expand_all(parity_max);

    let mut entries = [TableEntry::default(); 256];

    for (target, entry) in entries.iter_mut().enumerate() {
        let target = target as i32;

        let mut best_err = i32::MAX;
        let mut best = TableEntry::default();

        // Ascending min, then ascending max. Strict `<` keeps the first
        // minimum found; consumers expect byte-identical tables, so the
        // enumeration order settles exact-error ties and must not change.
        for &min_e in &min_expanded {
            for &max_e in &max_expanded {
                let interpolated = interpolate(min_e, max_e, weight);

                let delta = interpolated - target;
                let err = delta * delta;

                if err < best_err {
                    best_err = err;
                    best = TableEntry {
                        min: min_e as u8,
                        max: max_e as u8,
                        actual_color: interpolated as u8,
                    };
                }
            }
        }

        *entry = best;
    }

    let p_bits = if parity_bit_count == 2 {
        parity_min | (parity_max << 1)
    } else {
        parity_min
    };

    Table {
        index: weight_index as u8,
        p_bits: p_bits as u8,
        entries,
    }
}

// The production table set, one entry per mode/parity/index combination
// the encoder looks up. `g_mode0_p10_i3` is generated with both parity
// bits set, matching the shipped tables.
#[rustfmt::skip]
pub static TABLE_SPECS: [TableSpec; 48] = [
    // Mode 0: 4-bit endpoints, 2 P-bits, 3-bit indices
    TableSpec { name: "g_mode0_p00_i1", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p00_i2", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 0, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p00_i3", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 0, weight_index: 3, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p01_i1", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 1, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p01_i2", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 1, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p01_i3", bits: 4, parity_bit_count: 2, parity_min: 0, parity_max: 1, weight_index: 3, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p10_i1", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 0, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p10_i2", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 0, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p10_i3", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 1, weight_index: 3, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p11_i1", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 1, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p11_i2", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 1, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode0_p11_i3", bits: 4, parity_bit_count: 2, parity_min: 1, parity_max: 1, weight_index: 3, max_weight_index: 7 },

    // Mode 1: 6-bit endpoints, 1 shared P-bit, 3-bit indices
    TableSpec { name: "g_mode1_p0_i1", bits: 6, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode1_p0_i2", bits: 6, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode1_p0_i3", bits: 6, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 3, max_weight_index: 7 },
    TableSpec { name: "g_mode1_p1_i1", bits: 6, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode1_p1_i2", bits: 6, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode1_p1_i3", bits: 6, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 3, max_weight_index: 7 },

    // Mode 2: 5-bit endpoints, no P-bits, 2-bit indices
    TableSpec { name: "g_mode2", bits: 5, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },

    // Mode 3: 7-bit endpoints, 1 P-bit, 2-bit indices
    TableSpec { name: "g_mode3_p0", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode3_p1", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 1, max_weight_index: 3 },

    // Mode 4: 5-bit RGB endpoints, 6-bit alpha endpoints, no P-bits,
    // 2-bit indices on one plane and 3-bit on the other
    TableSpec { name: "g_mode4_rgb_low",     bits: 5, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode4_rgb_high_i1", bits: 5, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode4_rgb_high_i2", bits: 5, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode4_rgb_high_i3", bits: 5, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 3, max_weight_index: 7 },
    TableSpec { name: "g_mode4_a_low",       bits: 6, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode4_a_high_i1",   bits: 6, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 7 },
    TableSpec { name: "g_mode4_a_high_i2",   bits: 6, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 2, max_weight_index: 7 },
    TableSpec { name: "g_mode4_a_high_i3",   bits: 6, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 3, max_weight_index: 7 },

    // Mode 5: 7-bit RGB endpoints (8-bit alpha is lossless, no table),
    // no P-bits, 2-bit indices
    TableSpec { name: "g_mode5_rgb_low", bits: 7, parity_bit_count: 0, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },

    // Mode 6: 7-bit endpoints, 1 P-bit per endpoint, 4-bit indices
    TableSpec { name: "g_mode6_p0_i1", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i2", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 2, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i3", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 3, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i4", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 4, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i5", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 5, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i6", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 6, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p0_i7", bits: 7, parity_bit_count: 1, parity_min: 0, parity_max: 0, weight_index: 7, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i1", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 1, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i2", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 2, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i3", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 3, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i4", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 4, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i5", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 5, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i6", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 6, max_weight_index: 15 },
    TableSpec { name: "g_mode6_p1_i7", bits: 7, parity_bit_count: 1, parity_min: 1, parity_max: 1, weight_index: 7, max_weight_index: 15 },

    // Mode 7: 2 P-bits, 2-bit indices
    TableSpec { name: "g_mode7_p00", bits: 7, parity_bit_count: 2, parity_min: 0, parity_max: 0, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode7_p01", bits: 7, parity_bit_count: 2, parity_min: 0, parity_max: 1, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode7_p10", bits: 7, parity_bit_count: 2, parity_min: 1, parity_max: 0, weight_index: 1, max_weight_index: 3 },
    TableSpec { name: "g_mode7_p11", bits: 7, parity_bit_count: 2, parity_min: 1, parity_max: 1, weight_index: 1, max_weight_index: 3 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bits, weights};

    // Independent re-enumeration: the chosen entry must beat or match
    // every reachable candidate for its target value.
    fn assert_exhaustive(spec: &TableSpec) {
        let table = spec.generate();
        let weight = weights::table_for_max_index(spec.max_weight_index)[spec.weight_index] as i32;

        for (target, entry) in table.entries.iter().enumerate() {
            let chosen_delta = entry.actual_color as i32 - target as i32;
            let chosen_err = chosen_delta * chosen_delta;

            for min in 0..1u32 << spec.bits {
                for max in 0..1u32 << spec.bits {
                    let (min_e, max_e) = if spec.parity_bit_count != 0 {
                        (
                            bits::expand_with_parity(min, spec.bits, spec.parity_min) as i32,
                            bits::expand_with_parity(max, spec.bits, spec.parity_max) as i32,
                        )
                    } else {
                        (
                            bits::expand(min, spec.bits) as i32,
                            bits::expand(max, spec.bits) as i32,
                        )
                    };
                    let delta = interpolate(min_e, max_e, weight) - target as i32;
                    assert!(
                        chosen_err <= delta * delta,
                        "{}: target {} has a better candidate ({}, {})",
                        spec.name,
                        target,
                        min_e,
                        max_e
                    );
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_no_parity() {
        assert_exhaustive(&TABLE_SPECS[18]); // g_mode2
    }

    #[test]
    fn test_exhaustive_shared_parity() {
        assert_exhaustive(&TABLE_SPECS[12]); // g_mode1_p0_i1
    }

    #[test]
    fn test_exhaustive_independent_parity() {
        assert_exhaustive(&TABLE_SPECS[3]); // g_mode0_p01_i1
    }

    #[test]
    fn test_reconstruction_identity() {
        // Decoding the stored endpoints must reproduce actual_color exactly.
        for spec in [&TABLE_SPECS[18], &TABLE_SPECS[30], &TABLE_SPECS[44]] {
            let table = spec.generate();
            let weight =
                weights::table_for_max_index(spec.max_weight_index)[spec.weight_index] as i32;
            for entry in table.entries.iter() {
                assert_eq!(
                    interpolate(entry.min as i32, entry.max as i32, weight),
                    entry.actual_color as i32,
                    "{}",
                    spec.name
                );
            }
        }
    }

    #[test]
    fn test_endpoints_carry_parity() {
        // Every stored endpoint byte of a parity table has the forced
        // parity bit below its top `bits` bits.
        let spec = &TABLE_SPECS[6]; // g_mode0_p10_i1
        let table = spec.generate();
        for entry in table.entries.iter() {
            assert_eq!((entry.min as u32 >> (7 - spec.bits)) & 1, spec.parity_min);
            assert_eq!((entry.max as u32 >> (7 - spec.bits)) & 1, spec.parity_max);
        }
    }

    #[test]
    fn test_p_bits_packing() {
        assert_eq!(TABLE_SPECS[3].generate().p_bits, 0b10); // p01: min 0, max 1
        assert_eq!(TABLE_SPECS[6].generate().p_bits, 0b01); // p10: min 1, max 0
        assert_eq!(TABLE_SPECS[15].generate().p_bits, 1); // mode 1 shared p1
        assert_eq!(TABLE_SPECS[18].generate().p_bits, 0); // mode 2, no parity
    }

    #[test]
    fn test_search_error_is_tight() {
        // min == max reconstructs any expanded value exactly, and where
        // the solid pairs leave a gap (126 to 129) mixed pairs under the
        // weight-21 blend land within 1 of every byte in between.
        let table = generate_table(7, 0, 0, 0, 1, 3);
        for (target, entry) in table.entries.iter().enumerate() {
            let err = entry.actual_color as i32 - target as i32;
            assert!(err.abs() <= 1, "target {}: error {}", target, err);
        }
    }

    #[test]
    fn test_spec_names_are_unique() {
        for (i, a) in TABLE_SPECS.iter().enumerate() {
            for b in TABLE_SPECS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
