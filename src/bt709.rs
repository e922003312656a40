//! Octant rounding table for the approximate BT.709 error metric. When
//! the encoder quantizes a half-block average it has to decide, per
//! channel, whether to round up or down; under the approximate
//! luma/chroma metric the best choice is not the per-channel nearest,
//! so it is precomputed over a coarse RGB lattice.

/// Side length of the RGB lattice the rounding table covers.
pub const RESOLUTION: usize = 16;

/// Approximate BT.709 luma/chroma transform. Luma is weighted toward
/// green per luma perception; the chroma axes are fixed projections.
#[rustfmt::skip]
pub fn to_fake_bt709(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let y = r *  0.368233989135369   + g * 1.23876274963149    + b * 0.125054068802017;
    let u = r *  0.5                 - g * 0.4541529           - b * 0.04584709;
    let v = r * -0.081014709086133   - g * 0.272538676238785   + b * 0.353553390593274;
    (y, u, v)
}

/// Classifies a point to the cube corner octant nearest in transformed
/// space. Corner coordinates are 0 or `scale` per axis; the octant id
/// keeps the red decision in bit 0, green in bit 1 and blue in bit 2.
/// Equidistant corners resolve to the lowest octant id.
pub fn classify_octant(r: f32, g: f32, b: f32, scale: f32) -> u8 {
    let (y, u, v) = to_fake_bt709(r, g, b);

    let mut best_octant = 0u8;
    let mut best_dist = f32::MAX;

    for octant in 0..8u8 {
        let corner_r = if octant & 1 != 0 { scale } else { 0.0 };
        let corner_g = if octant & 2 != 0 { scale } else { 0.0 };
        let corner_b = if octant & 4 != 0 { scale } else { 0.0 };

        let (cy, cu, cv) = to_fake_bt709(corner_r, corner_g, corner_b);

        let (dy, du, dv) = (cy - y, cu - u, cv - v);
        let dist = dy * dy + du * du + dv * dv;

        if dist < best_dist {
            best_dist = dist;
            best_octant = octant;
        }
    }

    best_octant
}

/// Dense octant rounding table over the full RGB lattice, flattened as
/// `((r * resolution) + g) * resolution + b`.
pub fn generate_octant_table(resolution: usize) -> Vec<u8> {
    let mut table = Vec::with_capacity(resolution * resolution * resolution);
    let scale = resolution as f32;

    for r in 0..resolution {
        for g in 0..resolution {
            for b in 0..resolution {
                table.push(classify_octant(r as f32, g as f32, b as f32, scale));
            }
        }
    }

    table
}
