//! Convolution regression tests over synthetic images.

use rasterkit_filter::{Kernel, apply_kernel, apply_kernel_split, blur, sharpen};
use rasterkit_test::{checkerboard, gradient, max_channel_difference, solid};

#[test]
fn split_zero_leaves_image_unchanged() {
    let src = gradient(20, 15);
    for kernel in [Kernel::blur(), Kernel::sharpen()] {
        let out = apply_kernel_split(&src, &kernel, 0.0);
        assert_eq!(out, src);
    }
}

#[test]
fn split_hundred_matches_full_width() {
    let src = gradient(20, 15);
    let full = apply_kernel(&src, &Kernel::blur());
    let split = apply_kernel_split(&src, &Kernel::blur(), 100.0);
    assert_eq!(full, split);
}

#[test]
fn partial_split_changes_only_left_columns() {
    let src = checkerboard(16, 8, 2, (220, 220, 220), (30, 30, 30));
    let out = blur(&src, 25.0);
    // boundary = floor(16 * 25 / 100) = 4
    for y in 0..8 {
        for x in 4..16 {
            assert_eq!(out.get_rgb_unchecked(x, y), src.get_rgb_unchecked(x, y));
        }
    }
    // The checkerboard edge at x=1 must have been smoothed
    assert_ne!(
        out.get_rgb_unchecked(1, 1),
        src.get_rgb_unchecked(1, 1)
    );
}

#[test]
fn blur_smooths_checkerboard_contrast() {
    let src = checkerboard(16, 16, 1, (255, 255, 255), (0, 0, 0));
    let out = blur(&src, 100.0);
    // A 1-pixel checkerboard blurred with the 3x3 kernel lands mid-range
    // away from the borders: 4 corners of 0 (or 255) and the rest split.
    let (r, _, _) = out.get_rgb_unchecked(8, 8);
    assert!(
        (100..=160).contains(&(r as u32)),
        "expected mid-gray, got {r}"
    );
}

#[test]
fn sharpen_keeps_uniform_interior_reasonable() {
    // The sharpen kernel sums to 5/4 over a full window, so a uniform
    // midtone brightens but stays in range on this input.
    let src = solid(12, 12, (200, 200, 200));
    let out = sharpen(&src, 100.0);
    assert_eq!(out.width(), 12);
    let (r, g, b) = out.get_rgb_unchecked(6, 6);
    assert_eq!((r, g, b), (250, 250, 250)); // 200 * 5/4
}

#[test]
fn blur_is_stable_on_uniform_interior() {
    let src = solid(10, 10, (77, 77, 77));
    let out = blur(&src, 100.0);
    let interior = solid(1, 1, (77, 77, 77));
    let center = out.get_rgb_unchecked(5, 5);
    assert_eq!(center, interior.get_rgb_unchecked(0, 0));
    // Edges darken because out-of-bounds taps contribute nothing
    assert!(max_channel_difference(&out, &src) > 0);
}
