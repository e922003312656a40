//! ETC2 alpha rounding tables. Alpha offsets are quantized against the
//! positive half of the modifier tables; the rounding table answers
//! "which candidate offset is nearest" for every possible scaled input.

/// Positive halves of the 16 ETC2 alpha modifier tables. The negative
/// halves mirror these, so rounding only needs the positive side.
#[rustfmt::skip]
pub static ALPHA_MODIFIERS_POSITIVE: [[u8; 4]; 16] = [
    [ 2, 5, 8, 14 ],
    [ 2, 6, 9, 12 ],
    [ 1, 4, 7, 12 ],
    [ 1, 3, 5, 12 ],
    [ 2, 5, 7, 11 ],
    [ 2, 6, 8, 10 ],
    [ 3, 6, 7, 10 ],
    [ 2, 4, 7, 10 ],
    [ 1, 5, 7,  9 ],
    [ 1, 4, 7,  9 ],
    [ 1, 3, 7,  9 ],
    [ 1, 4, 6,  9 ],
    [ 2, 3, 6,  9 ],
    [ 0, 1, 2,  9 ],
    [ 3, 5, 7,  8 ],
    [ 2, 4, 6,  8 ],
];

/// Rounding inputs range over `0..=12`; larger offsets are clamped by
/// the encoder before the lookup.
pub const ROUNDING_TABLE_WIDTH: usize = 13;

/// For each modifier table, maps a rounding input to the index of the
/// nearest candidate offset. Equidistant inputs resolve to the higher
/// candidate index, matching the shipped tables.
pub fn generate_rounding_tables() -> [[u8; ROUNDING_TABLE_WIDTH]; 16] {
    let mut tables = [[0u8; ROUNDING_TABLE_WIDTH]; 16];

    for (candidates, table) in ALPHA_MODIFIERS_POSITIVE.iter().zip(tables.iter_mut()) {
        for (input, slot) in table.iter_mut().enumerate() {
            let mut best_index = 0;
            let mut best_dist = i32::MAX;

            for (index, &candidate) in candidates.iter().enumerate() {
                let dist = (input as i32 - candidate as i32).abs();
                if dist <= best_dist {
                    best_dist = dist;
                    best_index = index;
                }
            }

            *slot = best_index as u8;
        }
    }

    tables
}
