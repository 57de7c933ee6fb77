//! Point enhancement operations

use rasterkit_core::PixelBuffer;

/// Brighten or darken an image by a signed offset.
///
/// Adds `value` to every channel of every pixel, saturating at 0 and
/// 255. A value of 0 returns an unchanged copy.
pub fn brighten(src: &PixelBuffer, value: i32) -> PixelBuffer {
    if value == 0 {
        return src.clone();
    }

    let mut out = src.to_mut();
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(
                x,
                y,
                (r as i32 + value).clamp(0, 255) as u8,
                (g as i32 + value).clamp(0, 255) as u8,
                (b as i32 + value).clamp(0, 255) as u8,
            );
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelBufferMut;

    fn single_pixel(r: u8, g: u8, b: u8) -> PixelBuffer {
        let mut m = PixelBufferMut::new(1, 1).unwrap();
        m.set_rgb_unchecked(0, 0, r, g, b);
        m.into()
    }

    #[test]
    fn test_brighten_adds() {
        let out = brighten(&single_pixel(10, 20, 30), 15);
        assert_eq!(out.get_rgb_unchecked(0, 0), (25, 35, 45));
    }

    #[test]
    fn test_brighten_saturates_high() {
        let out = brighten(&single_pixel(250, 128, 0), 20);
        assert_eq!(out.get_rgb_unchecked(0, 0), (255, 148, 20));
    }

    #[test]
    fn test_darken_saturates_low() {
        let out = brighten(&single_pixel(5, 128, 255), -20);
        assert_eq!(out.get_rgb_unchecked(0, 0), (0, 108, 235));
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let src = single_pixel(1, 2, 3);
        assert_eq!(brighten(&src, 0), src);
    }
}
