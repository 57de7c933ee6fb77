//! Histogram-peak color correction
//!
//! A simple auto-white-balance heuristic: find the dominant value (the
//! histogram mode) of each channel, then shift every channel so its peak
//! moves toward the cross-channel average of the three peaks.
//!
//! Peaks are searched only in bins [10, 245): the extremes are excluded
//! so clipped-shadow and clipped-highlight spikes cannot dominate.

use rasterkit_core::{Histogram, PixelBuffer, split_position};

/// Peak search window (inclusive lower, exclusive upper).
const PEAK_LOW: usize = 10;
const PEAK_HIGH: usize = 245;

/// Find the peak POSITION of a channel histogram within [10, 245).
///
/// Strictly-greater comparison, so the lowest index wins ties.
pub fn find_peak(bins: &[u32; 256]) -> usize {
    let mut peak_count = 0u32;
    let mut peak_pos = 0usize;
    for (i, &count) in bins.iter().enumerate().take(PEAK_HIGH).skip(PEAK_LOW) {
        if count > peak_count {
            peak_count = count;
            peak_pos = i;
        }
    }
    peak_pos
}

/// Color-correct the full width of an image.
pub fn color_correct(src: &PixelBuffer) -> PixelBuffer {
    color_correct_split(src, rasterkit_core::FULL_WIDTH)
}

/// Color-correct the columns left of the split boundary.
///
/// Each channel is shifted by `(average - peak_channel)` where `average`
/// is the mean of the three channel peak positions; the shifted value is
/// clamped to [0, 255] and rounded to nearest.
pub fn color_correct_split(src: &PixelBuffer, split_percent: f64) -> PixelBuffer {
    let hist = Histogram::of(src);
    let peak_r = find_peak(&hist.red) as f64;
    let peak_g = find_peak(&hist.green) as f64;
    let peak_b = find_peak(&hist.blue) as f64;
    let average = (peak_r + peak_g + peak_b) / 3.0;

    let offsets = (average - peak_r, average - peak_g, average - peak_b);
    let boundary = split_position(src.width(), split_percent);
    let mut out = src.to_mut();

    for y in 0..src.height() {
        for x in 0..boundary {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(
                x,
                y,
                shift(r, offsets.0),
                shift(g, offsets.1),
                shift(b, offsets.2),
            );
        }
    }

    out.into()
}

#[inline]
fn shift(value: u8, offset: f64) -> u8 {
    (value as f64 + offset).clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::PixelBufferMut;

    #[test]
    fn test_find_peak_ignores_extremes() {
        let mut bins = [0u32; 256];
        bins[0] = 1000; // clipped shadows, must not win
        bins[250] = 1000; // clipped highlights, must not win
        bins[80] = 10;
        assert_eq!(find_peak(&bins), 80);
    }

    #[test]
    fn test_find_peak_tie_breaks_low() {
        let mut bins = [0u32; 256];
        bins[60] = 5;
        bins[90] = 5;
        assert_eq!(find_peak(&bins), 60);
    }

    #[test]
    fn test_peaks_align_to_average() {
        // Every pixel (100, 120, 140): peaks at 100/120/140, average 120.
        // R shifts +20, G is unchanged, B shifts -20.
        let mut m = PixelBufferMut::new(6, 4).unwrap();
        m.fill_rgb(100, 120, 140);
        let src: PixelBuffer = m.into();
        let out = color_correct(&src);
        for y in 0..4 {
            for x in 0..6 {
                assert_eq!(out.get_rgb_unchecked(x, y), (120, 120, 120));
            }
        }
    }

    #[test]
    fn test_split_boundary_pass_through() {
        let mut m = PixelBufferMut::new(4, 1).unwrap();
        m.fill_rgb(100, 120, 140);
        let src: PixelBuffer = m.into();
        let out = color_correct_split(&src, 50.0);
        assert_eq!(out.get_rgb_unchecked(0, 0), (120, 120, 120));
        assert_eq!(out.get_rgb_unchecked(1, 0), (120, 120, 120));
        assert_eq!(out.get_rgb_unchecked(2, 0), (100, 120, 140));
        assert_eq!(out.get_rgb_unchecked(3, 0), (100, 120, 140));
    }

    #[test]
    fn test_balanced_image_is_unchanged() {
        // All three peaks coincide, so every offset is zero.
        let mut m = PixelBufferMut::new(3, 3).unwrap();
        m.fill_rgb(90, 90, 90);
        let src: PixelBuffer = m.into();
        assert_eq!(color_correct(&src), src);
    }
}
