//! Split-aware convolution
//!
//! Applies a kernel to every pixel left of the split boundary; pixels at
//! or right of the boundary are copied from the source unchanged.
//!
//! Border handling: kernel taps that fall outside the image contribute
//! nothing. There is no wrapping and no edge replication, so border
//! pixels see a smaller effective kernel whose weights are NOT
//! renormalized (a blurred border darkens slightly). This is part of the
//! engine's fixed numeric contract.

use crate::Kernel;
use rasterkit_core::{PixelBuffer, split_position};

/// Convolve the full width of an image with a kernel.
pub fn apply_kernel(src: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    apply_kernel_split(src, kernel, rasterkit_core::FULL_WIDTH)
}

/// Convolve the columns left of the split boundary with a kernel.
///
/// The boundary is `floor(width * split_percent / 100)`; see
/// [`rasterkit_core::split_position`]. Each output channel is the f64
/// weighted sum over the kernel window, rounded to nearest and clamped
/// to [0, 255].
pub fn apply_kernel_split(src: &PixelBuffer, kernel: &Kernel, split_percent: f64) -> PixelBuffer {
    let w = src.width();
    let h = src.height();
    let radius = kernel.radius();
    let boundary = split_position(w, split_percent);

    let mut out = src.to_mut();

    for y in 0..h {
        for x in 0..boundary {
            let mut sum_r = 0.0f64;
            let mut sum_g = 0.0f64;
            let mut sum_b = 0.0f64;

            for ky in -radius..=radius {
                for kx in -radius..=radius {
                    let sx = x as i64 + kx as i64;
                    let sy = y as i64 + ky as i64;
                    if sx < 0 || sx >= w as i64 || sy < 0 || sy >= h as i64 {
                        continue;
                    }
                    let weight = kernel.get((kx + radius) as u32, (ky + radius) as u32);
                    let (r, g, b) = src.get_rgb_unchecked(sx as u32, sy as u32);
                    sum_r += r as f64 * weight;
                    sum_g += g as f64 * weight;
                    sum_b += b as f64 * weight;
                }
            }

            out.set_rgb_unchecked(
                x,
                y,
                sum_r.round().clamp(0.0, 255.0) as u8,
                sum_g.round().clamp(0.0, 255.0) as u8,
                sum_b.round().clamp(0.0, 255.0) as u8,
            );
        }
        // Columns at and beyond the boundary keep the source pixels
        // already present in the output copy.
    }

    out.into()
}

/// Blur an image with the 3x3 blur kernel.
pub fn blur(src: &PixelBuffer, split_percent: f64) -> PixelBuffer {
    apply_kernel_split(src, &Kernel::blur(), split_percent)
}

/// Sharpen an image with the 5x5 sharpen kernel.
pub fn sharpen(src: &PixelBuffer, split_percent: f64) -> PixelBuffer {
    apply_kernel_split(src, &Kernel::sharpen(), split_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelBufferMut;

    fn uniform(width: u32, height: u32, v: u8) -> PixelBuffer {
        let mut m = PixelBufferMut::new(width, height).unwrap();
        m.fill_rgb(v, v, v);
        m.into()
    }

    #[test]
    fn test_interior_pixel_of_uniform_image_is_stable() {
        // The blur kernel sums to 1, so a fully covered window reproduces
        // the input value.
        let src = uniform(5, 5, 128);
        let out = apply_kernel(&src, &Kernel::blur());
        assert_eq!(out.get_rgb_unchecked(2, 2), (128, 128, 128));
    }

    #[test]
    fn test_border_taps_are_skipped() {
        // Corner pixel of a uniform image: only 4 of the 9 taps land
        // inside, with weights 1/4 + 1/8 + 1/8 + 1/16 = 9/16.
        // 128 * 9/16 = 72 exactly.
        let src = uniform(5, 5, 128);
        let out = apply_kernel(&src, &Kernel::blur());
        assert_eq!(out.get_rgb_unchecked(0, 0), (72, 72, 72));
    }

    #[test]
    fn test_split_zero_is_identity() {
        let mut m = PixelBufferMut::new(4, 3).unwrap();
        for y in 0..3u32 {
            for x in 0..4u32 {
                m.set_rgb_unchecked(x, y, (x * 60) as u8, (y * 80) as u8, 7);
            }
        }
        let src: PixelBuffer = m.into();
        let out = apply_kernel_split(&src, &Kernel::blur(), 0.0);
        assert_eq!(out, src);
    }

    #[test]
    fn test_split_boundary_copies_right_side() {
        let src = uniform(10, 3, 200);
        let out = apply_kernel_split(&src, &Kernel::blur(), 50.0);
        // Left of column 5: corner effects apply at y=0
        assert_ne!(out.get_rgb_unchecked(0, 0), (200, 200, 200));
        // At and right of column 5: untouched
        for x in 5..10 {
            assert_eq!(out.get_rgb_unchecked(x, 0), (200, 200, 200));
        }
    }

    #[test]
    fn test_split_hundred_matches_full() {
        let src = uniform(6, 6, 90);
        let full = apply_kernel(&src, &Kernel::sharpen());
        let split = apply_kernel_split(&src, &Kernel::sharpen(), 100.0);
        assert_eq!(full, split);
    }

    #[test]
    fn test_rounding_to_nearest() {
        // Single white pixel, identity-free kernel: center tap 1/4 over
        // 255 gives 63.75 which must round to 64, not truncate to 63.
        let mut m = PixelBufferMut::new(1, 1).unwrap();
        m.set_rgb_unchecked(0, 0, 255, 255, 255);
        let src: PixelBuffer = m.into();
        let k = Kernel::from_slice(3, &[0.0, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let out = apply_kernel(&src, &k);
        assert_eq!(out.get_rgb_unchecked(0, 0), (64, 64, 64));
    }

    #[test]
    fn test_negative_sums_clamp_to_zero() {
        let src = uniform(3, 3, 100);
        let k = Kernel::from_slice(3, &[0.0, -1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let out = apply_kernel(&src, &k);
        // Interior: 0.5*100 - 100 = -50 -> 0
        assert_eq!(out.get_rgb_unchecked(1, 1), (0, 0, 0));
    }
}
