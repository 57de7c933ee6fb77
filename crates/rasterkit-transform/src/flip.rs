//! Mirror flips
//!
//! Pure pixel reindexing; no channel arithmetic is involved, so flips are
//! exact involutions.

use crate::TransformResult;
use rasterkit_core::PixelBuffer;

/// Flip an image left-right (horizontal mirror).
pub fn flip_horizontal(src: &PixelBuffer) -> TransformResult<PixelBuffer> {
    let w = src.width();
    let h = src.height();
    let mut out = src.create_template().try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(w - 1 - x, y, r, g, b);
        }
    }

    Ok(out.into())
}

/// Flip an image top-bottom (vertical mirror).
pub fn flip_vertical(src: &PixelBuffer) -> TransformResult<PixelBuffer> {
    let w = src.width();
    let h = src.height();
    let mut out = src.create_template().try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(x, h - 1 - y, r, g, b);
        }
    }

    Ok(out.into())
}
