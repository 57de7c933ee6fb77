//! rasterkit-test - Test support for rasterkit
//!
//! Deterministic synthetic images and comparison helpers shared by the
//! integration tests of the other crates. All generators are pure
//! functions of their arguments, so expected values in tests can be
//! computed by hand.

use rasterkit_core::{PixelBuffer, PixelBufferMut};

/// A solid-color image.
pub fn solid(width: u32, height: u32, rgb: (u8, u8, u8)) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height).expect("test dimensions are nonzero");
    m.fill_rgb(rgb.0, rgb.1, rgb.2);
    m.into()
}

/// A smooth gradient: red grows along x, green along y, blue along x+y.
///
/// All three channels stay in range for any dimensions.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut m = PixelBufferMut::new(width, height).expect("test dimensions are nonzero");
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            m.set_rgb_unchecked(x, y, r, g, b);
        }
    }
    m.into()
}

/// A two-color checkerboard with square cells.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    light: (u8, u8, u8),
    dark: (u8, u8, u8),
) -> PixelBuffer {
    let cell = cell.max(1);
    let mut m = PixelBufferMut::new(width, height).expect("test dimensions are nonzero");
    for y in 0..height {
        for x in 0..width {
            let c = if ((x / cell) + (y / cell)) % 2 == 0 {
                light
            } else {
                dark
            };
            m.set_rgb_unchecked(x, y, c.0, c.1, c.2);
        }
    }
    m.into()
}

/// The largest per-channel absolute difference between two buffers.
///
/// # Panics
///
/// Panics if the buffers have different dimensions.
pub fn max_channel_difference(a: &PixelBuffer, b: &PixelBuffer) -> u32 {
    assert!(
        a.sizes_equal(b),
        "buffers differ in size: {}x{} vs {}x{}",
        a.width(),
        a.height(),
        b.width(),
        b.height()
    );
    let mut max = 0u32;
    for y in 0..a.height() {
        for x in 0..a.width() {
            let (ar, ag, ab) = a.get_rgb_unchecked(x, y);
            let (br, bg, bb) = b.get_rgb_unchecked(x, y);
            for (p, q) in [(ar, br), (ag, bg), (ab, bb)] {
                max = max.max((p as i32 - q as i32).unsigned_abs());
            }
        }
    }
    max
}

/// Assert that two buffers match within a per-channel tolerance.
///
/// # Panics
///
/// Panics with the offending coordinates if any channel differs by more
/// than `tolerance`.
pub fn assert_buffers_close(a: &PixelBuffer, b: &PixelBuffer, tolerance: u32) {
    assert!(a.sizes_equal(b), "buffers differ in size");
    for y in 0..a.height() {
        for x in 0..a.width() {
            let pa = a.get_rgb_unchecked(x, y);
            let pb = b.get_rgb_unchecked(x, y);
            let diff = [
                (pa.0 as i32 - pb.0 as i32).unsigned_abs(),
                (pa.1 as i32 - pb.1 as i32).unsigned_abs(),
                (pa.2 as i32 - pb.2 as i32).unsigned_abs(),
            ];
            assert!(
                diff.iter().all(|&d| d <= tolerance),
                "pixel ({x}, {y}): {pa:?} vs {pb:?} exceeds tolerance {tolerance}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_in_range() {
        let g = gradient(13, 7);
        assert_eq!(g.width(), 13);
        assert_eq!(g.height(), 7);
        let c = checkerboard(8, 8, 2, (200, 200, 200), (50, 50, 50));
        assert_eq!(c.get_rgb_unchecked(0, 0), (200, 200, 200));
        assert_eq!(c.get_rgb_unchecked(2, 0), (50, 50, 50));
    }

    #[test]
    fn test_max_channel_difference() {
        let a = solid(2, 2, (10, 20, 30));
        let b = solid(2, 2, (15, 20, 22));
        assert_eq!(max_channel_difference(&a, &b), 8);
        assert_buffers_close(&a, &b, 8);
    }
}
