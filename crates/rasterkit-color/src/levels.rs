//! Levels adjustment
//!
//! Remaps channel intensities through the quadratic curve fit through the
//! control points (black, 0), (mid, 128) and (white, 255). The curve
//! coefficients are closed-form, not iteratively fitted:
//!
//! ```text
//! A(b,m,w) = b²(m−w) − b(m²−w²) + wm² − mw²
//! Aa = −b(128−255) + 128w − 255m
//! Ab = b²(128−255) + 255m² − 128w²
//! Ac = b²(255m − 128w) − b(255m² − 128w²)
//! y(x) = clamp(round((Aa·x² + Ab·x + Ac) / A0), 0, 255)
//! ```
//!
//! The denominator `A0` is always `A(0, 128, 255)`, not the user's
//! control points (a long-standing trait of the curve; with the canonical
//! points the mapping is exactly the identity).

use crate::{ColorError, ColorResult};
use rasterkit_core::{PixelBuffer, split_position};

/// The quadratic curve for one set of control points
#[derive(Debug, Clone, Copy)]
struct LevelsCurve {
    aa: f64,
    ab: f64,
    ac: f64,
    denom: f64,
}

/// A(b, m, w) from the closed-form derivation.
fn coefficient_a(b: f64, m: f64, w: f64) -> f64 {
    b * b * (m - w) - b * (m * m - w * w) + w * m * m - m * w * w
}

impl LevelsCurve {
    fn new(b: i32, m: i32, w: i32) -> Self {
        let (bf, mf, wf) = (b as f64, m as f64, w as f64);
        LevelsCurve {
            aa: -bf * (128.0 - 255.0) + 128.0 * wf - 255.0 * mf,
            ab: bf * bf * (128.0 - 255.0) + 255.0 * mf * mf - 128.0 * wf * wf,
            ac: bf * bf * (255.0 * mf - 128.0 * wf) - bf * (255.0 * mf * mf - 128.0 * wf * wf),
            denom: coefficient_a(0.0, 128.0, 255.0),
        }
    }

    #[inline]
    fn remap(&self, x: u8) -> u8 {
        let xf = x as f64;
        let y = (self.aa * xf * xf + self.ab * xf + self.ac) / self.denom;
        y.clamp(0.0, 255.0).round() as u8
    }
}

/// Adjust levels over the full width of an image.
pub fn adjust_levels(
    src: &PixelBuffer,
    black: i32,
    mid: i32,
    white: i32,
) -> ColorResult<PixelBuffer> {
    adjust_levels_split(src, black, mid, white, rasterkit_core::FULL_WIDTH)
}

/// Adjust levels on the columns left of the split boundary.
///
/// # Errors
///
/// Returns [`ColorError::InvalidLevels`] unless
/// `0 <= black < mid < white <= 255`. Validation happens before any
/// pixel work; nothing is partially applied.
pub fn adjust_levels_split(
    src: &PixelBuffer,
    black: i32,
    mid: i32,
    white: i32,
    split_percent: f64,
) -> ColorResult<PixelBuffer> {
    if !(0..=255).contains(&black)
        || !(0..=255).contains(&mid)
        || !(0..=255).contains(&white)
        || !(black < mid && mid < white)
    {
        return Err(ColorError::InvalidLevels {
            black,
            mid,
            white,
        });
    }

    let curve = LevelsCurve::new(black, mid, white);
    let boundary = split_position(src.width(), split_percent);
    let mut out = src.to_mut();

    for y in 0..src.height() {
        for x in 0..boundary {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(x, y, curve.remap(r), curve.remap(g), curve.remap(b));
        }
    }

    Ok(out.into())
}
