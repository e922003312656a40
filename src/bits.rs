/// Expands a `bits`-wide value to 8 bits by shifting it to the top and
/// replicating its most significant bits into the vacated low bits.
/// This is the value a fixed-point decoder reconstructs from the stored
/// field, so the search loops compare against it directly.
pub fn expand(v: u32, bits: u32) -> u32 {
    let v = v << (8 - bits);
    v | (v >> bits)
}

/// Expansion for endpoint fields that carry a parity bit: the parity
/// bit is inserted at position `7 - bits`, directly below the stored
/// value, and both are replicated into the low bits together.
pub fn expand_with_parity(v: u32, bits: u32, parity_bit: u32) -> u32 {
    let mut v = v << (8 - bits);
    v |= parity_bit << (7 - bits);
    v | (v >> (bits + 1))
}
