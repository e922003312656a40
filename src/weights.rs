//! Fixed interpolation weight tables for 2, 3 and 4-bit per-pixel
//! indices. Each weight is a fixed-point blend fraction in [0, 64].

#[rustfmt::skip]
pub static WEIGHTS2: [u8; 4] = [0, 21, 43, 64];

#[rustfmt::skip]
pub static WEIGHTS3: [u8; 8] = [0, 9, 18, 27, 37, 46, 55, 64];

#[rustfmt::skip]
pub static WEIGHTS4: [u8; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Selects the weight table matching the maximum per-pixel index value
/// (3, 7 or 15).
pub fn table_for_max_index(max_index: u32) -> &'static [u8] {
    match max_index {
        3 => &WEIGHTS2,
        7 => &WEIGHTS3,
        15 => &WEIGHTS4,
        _ => unreachable!(),
    }
}
