//! Linear color matrix transforms
//!
//! Maps each RGB triple through a fixed 3x3 matrix. Used for the
//! greyscale and sepia operations.
//!
//! Clamping is asymmetric on purpose: the raw sum is capped at 255
//! before rounding, but negative sums are not raised to 0 by the
//! transform itself (the 8-bit store saturates instead). The shipped
//! matrices have no negative coefficients, so the asymmetry is not
//! observable with them; it is kept because downstream output stability
//! depends on the exact arithmetic order.

use rasterkit_core::{PixelBuffer, split_position};

/// A 3x3 color transform matrix
///
/// Row `c` holds the weights producing output channel `c` from the input
/// (r, g, b) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Create a matrix from its rows.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        ColorMatrix { rows }
    }

    /// The luma-weighted greyscale matrix (every row identical).
    pub const fn greyscale() -> Self {
        const ROW: [f64; 3] = [0.2126, 0.7152, 0.0722];
        ColorMatrix {
            rows: [ROW, ROW, ROW],
        }
    }

    /// The sepia tone matrix.
    pub const fn sepia() -> Self {
        ColorMatrix {
            rows: [
                [0.393, 0.769, 0.189],
                [0.349, 0.686, 0.168],
                [0.272, 0.534, 0.131],
            ],
        }
    }

    /// Map one RGB triple through the matrix.
    ///
    /// Each output channel is capped at 255.0 and rounded to nearest.
    #[inline]
    pub fn map(&self, r: u8, g: u8, b: u8) -> (u8, u8, u8) {
        let input = [r as f64, g as f64, b as f64];
        let mut out = [0u8; 3];
        for (c, row) in self.rows.iter().enumerate() {
            let raw = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
            let capped = raw.min(255.0);
            // Negative results rely on the saturating u8 cast; see the
            // module docs on asymmetric clamping.
            out[c] = capped.round() as u8;
        }
        (out[0], out[1], out[2])
    }
}

/// Apply a color matrix to the full width of an image.
pub fn apply_matrix(src: &PixelBuffer, matrix: &ColorMatrix) -> PixelBuffer {
    apply_matrix_split(src, matrix, rasterkit_core::FULL_WIDTH)
}

/// Apply a color matrix to the columns left of the split boundary.
///
/// Pixels at or right of `floor(width * split_percent / 100)` are copied
/// unchanged.
pub fn apply_matrix_split(
    src: &PixelBuffer,
    matrix: &ColorMatrix,
    split_percent: f64,
) -> PixelBuffer {
    let boundary = split_position(src.width(), split_percent);
    let mut out = src.to_mut();

    for y in 0..src.height() {
        for x in 0..boundary {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            let (nr, ng, nb) = matrix.map(r, g, b);
            out.set_rgb_unchecked(x, y, nr, ng, nb);
        }
    }

    out.into()
}

/// Convert to greyscale using the luma matrix.
pub fn greyscale(src: &PixelBuffer, split_percent: f64) -> PixelBuffer {
    apply_matrix_split(src, &ColorMatrix::greyscale(), split_percent)
}

/// Apply the sepia tone matrix.
pub fn sepia(src: &PixelBuffer, split_percent: f64) -> PixelBuffer {
    apply_matrix_split(src, &ColorMatrix::sepia(), split_percent)
}
