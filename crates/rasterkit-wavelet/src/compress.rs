//! Lossy compression pipeline
//!
//! Compression runs the channel-isolate-then-sum technique: the image is
//! split into three isolated single-channel planes, each plane is padded
//! to a power-of-two square and Haar-transformed, small coefficients are
//! zeroed against a cutoff chosen across all three planes, and the
//! inverse transforms are summed back into one RGB buffer. All
//! arithmetic stays in f64; rounding and clamping happen exactly once,
//! at recombination.

use crate::haar::{forward_2d, inverse_2d};
use crate::{WaveletError, WaveletResult};
use rasterkit_core::{PixelBuffer, PixelBufferMut, split_rgb};

/// Coefficients below this magnitude never participate in cutoff
/// selection.
const SIGNIFICANCE_FLOOR: f64 = 1e-3;

/// Magnitudes closer than this are treated as the same value when
/// selecting the cutoff.
const DEDUP_TOLERANCE: f64 = 1e-7;

/// Compress an image, keeping roughly `retain_percent` of its detail.
///
/// `retain_percent = 100` is a lossless round trip up to floating-point
/// error; `retain_percent = 0` zeroes every significant coefficient.
///
/// # Errors
///
/// Returns [`WaveletError::InvalidRetainPercent`] if `retain_percent` is
/// outside [0, 100]. Validation happens before any transform work.
pub fn compress(src: &PixelBuffer, retain_percent: i32) -> WaveletResult<PixelBuffer> {
    if !(0..=100).contains(&retain_percent) {
        return Err(WaveletError::InvalidRetainPercent(retain_percent));
    }

    let width = src.width();
    let height = src.height();
    let side = padded_side(width, height);

    // Isolate the channels and lift each into a padded f64 plane.
    let (red, green, blue) = split_rgb(src);
    let mut planes = [
        lift_plane(&red, side),
        lift_plane(&green, side),
        lift_plane(&blue, side),
    ];

    for plane in &mut planes {
        forward_2d(plane);
    }

    if let Some(cutoff) = select_cutoff(&planes, retain_percent) {
        for plane in &mut planes {
            for row in plane.iter_mut() {
                for value in row.iter_mut() {
                    if value.abs() <= cutoff {
                        *value = 0.0;
                    }
                }
            }
        }
    }

    for plane in &mut planes {
        inverse_2d(plane);
    }

    Ok(recombine_planes(&planes, width, height))
}

/// Smallest power of two that covers both dimensions.
fn padded_side(width: u32, height: u32) -> usize {
    (width.max(height) as usize).next_power_of_two()
}

/// Lift an isolated channel plane into a zero-padded square f64 grid.
///
/// The plane value is the sum of the three channel slots; an isolated
/// buffer carries its channel in one slot and zero elsewhere, so the sum
/// recovers the channel value.
fn lift_plane(isolated: &PixelBuffer, side: usize) -> Vec<Vec<f64>> {
    let mut grid = vec![vec![0.0f64; side]; side];
    for y in 0..isolated.height() {
        for x in 0..isolated.width() {
            let (r, g, b) = isolated.get_rgb_unchecked(x, y);
            grid[y as usize][x as usize] = (r as u32 + g as u32 + b as u32) as f64;
        }
    }
    grid
}

/// Choose the zeroing cutoff for the requested retain percentage.
///
/// Collects the magnitude of every significant coefficient across all
/// planes, deduplicates near-equal magnitudes, sorts ascending, and
/// picks the value such that the smallest `(100 - retain)` percent of
/// distinct magnitudes fall at or below it. Returns `None` when nothing
/// should be zeroed (retain = 100, or no significant coefficients).
fn select_cutoff(planes: &[Vec<Vec<f64>>; 3], retain_percent: i32) -> Option<f64> {
    if retain_percent == 100 {
        return None;
    }

    let mut magnitudes: Vec<f64> = planes
        .iter()
        .flat_map(|plane| plane.iter())
        .flat_map(|row| row.iter())
        .map(|c| c.abs())
        .filter(|m| *m >= SIGNIFICANCE_FLOOR)
        .collect();
    magnitudes.sort_by(f64::total_cmp);
    magnitudes.dedup_by(|a, b| (*a - *b).abs() < DEDUP_TOLERANCE);

    if magnitudes.is_empty() {
        return None;
    }

    let count = magnitudes.len();
    let discard = (100 - retain_percent) as f64 / 100.0;
    let index = (discard * count as f64).round() as usize;
    if index == 0 {
        None
    } else {
        Some(magnitudes[index.min(count) - 1])
    }
}

/// Sum the three channel planes back into one RGB buffer.
///
/// Each plane contributes to its own channel slot; values are rounded to
/// nearest and clamped to [0, 255] here and nowhere else.
fn recombine_planes(planes: &[Vec<Vec<f64>>; 3], width: u32, height: u32) -> PixelBuffer {
    let mut out = PixelBufferMut::new(width, height).expect("source dimensions are nonzero");
    for y in 0..height {
        for x in 0..width {
            let r = planes[0][y as usize][x as usize];
            let g = planes[1][y as usize][x as usize];
            let b = planes[2][y as usize][x as usize];
            out.set_rgb_unchecked(
                x,
                y,
                r.round().clamp(0.0, 255.0) as u8,
                g.round().clamp(0.0, 255.0) as u8,
                b.round().clamp(0.0, 255.0) as u8,
            );
        }
    }
    out.into()
}
