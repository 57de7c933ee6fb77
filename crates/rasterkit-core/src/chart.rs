//! Histogram chart rendering
//!
//! Renders a [`Histogram`] as a 256x256 line chart: white background,
//! gray gridlines every 32 pixels, and one polyline per color channel
//! scaled so the tallest bin of that channel spans the full height.
//! The numeric histogram is the engine contract; the chart is a
//! convenience for the histogram command's image output.

use crate::buffer::{PixelBuffer, PixelBufferMut};
use crate::histogram::{BINS, Histogram};

/// Chart edge length in pixels (one column per bin).
pub const CHART_SIZE: u32 = 256;

/// Gridline spacing in pixels.
const GRID_STEP: u32 = 32;

/// Gridline color.
const GRID_GRAY: (u8, u8, u8) = (128, 128, 128);

/// Render a histogram as a 256x256 chart image.
pub fn render_chart(hist: &Histogram) -> PixelBuffer {
    let mut out = PixelBufferMut::new(CHART_SIZE, CHART_SIZE).expect("chart dimensions are fixed");
    out.fill_rgb(255, 255, 255);

    // Grid
    for i in (0..CHART_SIZE).step_by(GRID_STEP as usize) {
        for j in 0..CHART_SIZE {
            let (r, g, b) = GRID_GRAY;
            out.set_rgb_unchecked(i, j, r, g, b);
            out.set_rgb_unchecked(j, i, r, g, b);
        }
    }

    draw_channel(&mut out, &hist.red, (255, 0, 0));
    draw_channel(&mut out, &hist.green, (0, 255, 0));
    draw_channel(&mut out, &hist.blue, (0, 0, 255));

    out.into()
}

/// Draw one channel's polyline, scaled to the channel's tallest bin.
///
/// Segments with a zero count at either endpoint are skipped, leaving
/// gaps where the channel has no pixels.
fn draw_channel(out: &mut PixelBufferMut, bins: &[u32; BINS], color: (u8, u8, u8)) {
    let max = bins.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }
    let scale = CHART_SIZE as f64 / max as f64;

    for i in 0..BINS - 1 {
        if bins[i] == 0 || bins[i + 1] == 0 {
            continue;
        }
        let x1 = i as i32;
        let y1 = CHART_SIZE as i32 - (bins[i] as f64 * scale) as i32;
        let x2 = (i + 1) as i32;
        let y2 = CHART_SIZE as i32 - (bins[i + 1] as f64 * scale) as i32;
        draw_line(out, x1, y1, x2, y2, color);
    }
}

/// Bresenham line with clipping at the buffer edges.
fn draw_line(out: &mut PixelBufferMut, x1: i32, y1: i32, x2: i32, y2: i32, color: (u8, u8, u8)) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        plot(out, x, y, color);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[inline]
fn plot(out: &mut PixelBufferMut, x: i32, y: i32, color: (u8, u8, u8)) {
    if x >= 0 && y >= 0 && (x as u32) < out.width() && (y as u32) < out.height() {
        out.set_rgb_unchecked(x as u32, y as u32, color.0, color.1, color.2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelBufferMut;

    #[test]
    fn test_chart_dimensions() {
        let mut m = PixelBufferMut::new(4, 4).unwrap();
        m.fill_rgb(100, 150, 200);
        let hist = Histogram::of(&m.into());
        let chart = render_chart(&hist);
        assert_eq!(chart.width(), CHART_SIZE);
        assert_eq!(chart.height(), CHART_SIZE);
    }

    #[test]
    fn test_chart_has_grid_and_background() {
        let mut m = PixelBufferMut::new(4, 4).unwrap();
        m.fill_rgb(100, 150, 200);
        let hist = Histogram::of(&m.into());
        let chart = render_chart(&hist);
        // A point off the grid and away from every polyline stays white
        assert_eq!(chart.get_rgb_unchecked(17, 17), (255, 255, 255));
        // Gridline rows/columns are gray where no polyline crosses
        assert_eq!(chart.get_rgb_unchecked(33, 32), GRID_GRAY);
    }

    #[test]
    fn test_uniform_channel_peaks_at_top() {
        // Every red value is 100, so bin 100 is the channel maximum and
        // its plotted point sits at the top row; the single-bin polyline
        // has no nonzero neighbor, so nothing is drawn for red at all.
        let mut m = PixelBufferMut::new(4, 4).unwrap();
        m.fill_rgb(100, 150, 200);
        let hist = Histogram::of(&m.into());
        let chart = render_chart(&hist);
        assert_ne!(chart.get_rgb_unchecked(100, 0), (255, 0, 0));
    }
}
