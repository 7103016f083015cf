//! Chroma-key background removal and halo-edge cleanup.
//!
//! Two independent per-pixel transforms. Chroma keying alone leaves a
//! coloured fringe where anti-aliased edge pixels blended toward the removed
//! background; halo removal is a second pass that eats that fringe without a
//! full colour-decontamination algorithm.

use crate::types::{Colour, PixelBuffer};

/// Pixels with alpha below this seed the halo dilation (0-255).
pub const HALO_SEED_ALPHA: u8 = 128;

/// Remove a flat background colour by distance threshold.
///
/// Every pixel whose Euclidean RGB distance to `target` is within
/// `tolerance` has its alpha set to zero. RGB channels are never modified,
/// preserving anti-aliased edge colour for later compositing. With a
/// tolerance of zero only exact matches are keyed.
pub fn chroma_key(buffer: &PixelBuffer, target: Colour, tolerance: f64) -> PixelBuffer {
    let tolerance_squared = tolerance * tolerance;
    let mut out = buffer.clone();

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let pixel = buffer.get(x, y);
            if f64::from(pixel.distance_squared(target)) <= tolerance_squared {
                out.set(x, y, Colour::new(pixel.r, pixel.g, pixel.b, 0));
            }
        }
    }

    out
}

/// Dilate transparency outward from already-transparent pixels.
///
/// Phase one collects every pixel with alpha below [`HALO_SEED_ALPHA`] as a
/// seed. Phase two marks every pixel within true Euclidean distance
/// `expansion` of any seed (circular structuring element, not square). The
/// final pass zeroes alpha across the whole marked set.
///
/// Candidates are only ever collected from the original seed set: expansion
/// never re-seeds from newly-cleared pixels, so the growth is bounded by
/// the radius no matter how the cleared set develops.
pub fn remove_halo(buffer: &PixelBuffer, expansion: u32) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    let mut cleared = vec![false; width as usize * height as usize];
    let mut seeds: Vec<(u32, u32)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if buffer.alpha(x, y) < HALO_SEED_ALPHA {
                seeds.push((x, y));
                cleared[(y * width + x) as usize] = true;
            }
        }
    }

    // Circular structuring element.
    let r = i64::from(expansion);
    let mut offsets: Vec<(i64, i64)> = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r && (dx, dy) != (0, 0) {
                offsets.push((dx, dy));
            }
        }
    }

    for &(x, y) in &seeds {
        for &(dx, dy) in &offsets {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                continue;
            }
            cleared[(ny as u32 * width + nx as u32) as usize] = true;
        }
    }

    let mut out = buffer.clone();
    for y in 0..height {
        for x in 0..width {
            if cleared[(y * width + x) as usize] {
                let pixel = buffer.get(x, y);
                out.set(x, y, Colour::new(pixel.r, pixel.g, pixel.b, 0));
            }
        }
    }

    out
}
