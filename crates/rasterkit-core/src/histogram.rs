//! Histogram generation
//!
//! Computes per-channel pixel value distributions in a single pass.

use crate::buffer::PixelBuffer;

/// Number of bins per channel (one per 8-bit value).
pub const BINS: usize = 256;

/// Per-channel value distributions of an RGB image
///
/// Holds 256-bin counts for the red, green and blue channels plus the
/// truncated-mean intensity. The sum of any one channel's bins equals
/// `width * height` of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel counts
    pub red: [u32; BINS],
    /// Green channel counts
    pub green: [u32; BINS],
    /// Blue channel counts
    pub blue: [u32; BINS],
    /// Intensity ((r+g+b)/3, truncated) counts
    pub intensity: [u32; BINS],
}

impl Histogram {
    /// Compute the histogram of a buffer.
    ///
    /// Single full pass over all pixels; inputs are already in range so
    /// no clamping is involved.
    pub fn of(buffer: &PixelBuffer) -> Self {
        let mut red = [0u32; BINS];
        let mut green = [0u32; BINS];
        let mut blue = [0u32; BINS];
        let mut intensity = [0u32; BINS];

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let (r, g, b) = buffer.get_rgb_unchecked(x, y);
                red[r as usize] += 1;
                green[g as usize] += 1;
                blue[b as usize] += 1;
                let avg = (r as u32 + g as u32 + b as u32) / 3;
                intensity[avg as usize] += 1;
            }
        }

        Histogram {
            red,
            green,
            blue,
            intensity,
        }
    }
}
