use crate::bits;

/// Optimal endpoint pair for one target value. `span` is the distance
/// between the expanded endpoints; the encoder uses it to prefer
/// tighter pairs when several channels share one endpoint pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub min: u8,
    pub max: u8,
    pub actual_color: u8,
    pub span: u8,
}

/// Parameters of one named table in the emitted header.
pub struct TableSpec {
    pub name: &'static str,
    pub bits: u32,
    pub index_count: u32,
    pub paranoia: f64,
}

impl TableSpec {
    pub fn generate(&self) -> [TableEntry; 256] {
        generate_table(self.bits, self.index_count, self.paranoia)
    }
}

#[rustfmt::skip]
pub static TABLE_SPECS: [TableSpec; 8] = [
    TableSpec { name: "g_singleColor5_3",   bits: 5, index_count: 3, paranoia: 0.0 },
    TableSpec { name: "g_singleColor6_3",   bits: 6, index_count: 3, paranoia: 0.0 },
    TableSpec { name: "g_singleColor5_2",   bits: 5, index_count: 2, paranoia: 0.0 },
    TableSpec { name: "g_singleColor6_2",   bits: 6, index_count: 2, paranoia: 0.0 },
    TableSpec { name: "g_singleColor5_3_p", bits: 5, index_count: 3, paranoia: 0.03 },
    TableSpec { name: "g_singleColor6_3_p", bits: 6, index_count: 3, paranoia: 0.03 },
    TableSpec { name: "g_singleColor5_2_p", bits: 5, index_count: 2, paranoia: 0.03 },
    TableSpec { name: "g_singleColor6_2_p", bits: 6, index_count: 2, paranoia: 0.03 },
];

/// Truncating blend used by S3TC single-color blocks: one third or one
/// half of the way from `min` to `max` depending on the index count.
pub fn interpolate(min_expanded: i32, max_expanded: i32, index_count: i32) -> i32 {
    (min_expanded * (index_count - 1) + max_expanded) / index_count
}

/// Searches every quantized endpoint pair for the one reconstructing
/// each target value best. `paranoia` biases the metric against wide
/// endpoint spans; independent of it, an exact error tie always goes to
/// the candidate with the smaller span.
pub fn generate_table(bits: u32, index_count: u32, paranoia: f64) -> [TableEntry; 256] {
    let ep_range = 1u32 << bits;
    let index_count = index_count as i32;

    let expanded: Vec<i32> = (0..ep_range).map(|v| bits::expand(v, bits) as i32).collect();

    let mut entries = [TableEntry::default(); 256];

    for (target, entry) in entries.iter_mut().enumerate() {
        let target = target as i32;

        let mut best_err = f64::MAX;
        let mut best_span = 255;
        let mut best = TableEntry::default();

        for &min_e in &expanded {
            for &max_e in &expanded {
                let interpolated = interpolate(min_e, max_e, index_count);
                let span = (min_e - max_e).abs();

                let delta = (interpolated - target).abs() as f64 + span as f64 * paranoia;
                let err = delta * delta;

                if err < best_err || (err == best_err && span < best_span) {
                    best_err = err;
                    best_span = span;
                    best = TableEntry {
                        min: min_e as u8,
                        max: max_e as u8,
                        actual_color: interpolated as u8,
                        span: span as u8,
                    };
                }
            }
        }

        *entry = best;
    }

    entries
}
