//! Compression regression tests over synthetic images.

use rasterkit_test::{assert_buffers_close, checkerboard, gradient, solid};
use rasterkit_wavelet::compress;

#[test]
fn full_retain_roundtrips_within_one_level() {
    // Power-of-two and non-power-of-two shapes both pass through the
    // pad/transform/invert/unpad pipeline within rounding error.
    for src in [gradient(16, 16), gradient(12, 10), gradient(7, 3)] {
        let out = compress(&src, 100).unwrap();
        assert_buffers_close(&out, &src, 1);
    }
}

#[test]
fn zero_retain_flattens_the_image() {
    let src = solid(8, 8, (100, 150, 200));
    let out = compress(&src, 0).unwrap();
    assert_eq!(out, solid(8, 8, (0, 0, 0)));
}

#[test]
fn heavy_compression_still_roughly_preserves_flat_regions() {
    // Most of a checkerboard's energy is in the coarse coefficients;
    // moderate retain keeps the mean intact even as detail goes.
    let src = checkerboard(16, 16, 8, (180, 180, 180), (60, 60, 60));
    let out = compress(&src, 60).unwrap();
    assert_eq!(out.width(), 16);
    assert_eq!(out.height(), 16);
    let mut total = 0u64;
    for y in 0..16 {
        for x in 0..16 {
            total += out.get_rgb_unchecked(x, y).0 as u64;
        }
    }
    let mean = total / 256;
    assert!(
        (90..=150).contains(&mean),
        "mean drifted too far: {mean}"
    );
}

#[test]
fn compression_loss_spans_the_retain_range() {
    let src = gradient(32, 32);
    let lossless = compress(&src, 100).unwrap();
    assert!(rasterkit_test::max_channel_difference(&lossless, &src) <= 1);
    // Dropping every significant coefficient wipes the gradient out.
    let flattened = compress(&src, 0).unwrap();
    assert!(rasterkit_test::max_channel_difference(&flattened, &src) > 100);
}

#[test]
fn single_pixel_image_survives() {
    let src = solid(1, 1, (42, 99, 7));
    let out = compress(&src, 100).unwrap();
    assert_eq!(out, src);
}
