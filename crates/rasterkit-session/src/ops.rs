//! The operation vocabulary
//!
//! Every single-input editing operation is a variant of the closed
//! [`Operation`] enum, dispatched through one match in [`execute`].
//! Adding an operation means adding a variant and a match arm; there is
//! no open-ended registry and no string-keyed dispatch.

use crate::SessionResult;
use rasterkit_core::{Component, ExtractMode, PixelBuffer, extract_component};

/// A single-input editing operation
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Mirror left-right
    FlipHorizontal,
    /// Mirror top-bottom
    FlipVertical,
    /// Add a signed offset to every channel
    Brighten { value: i32 },
    /// 3x3 blur over the split region
    Blur { split_percent: f64 },
    /// 5x5 sharpen over the split region
    Sharpen { split_percent: f64 },
    /// Luma greyscale over the split region
    Greyscale { split_percent: f64 },
    /// Sepia tone over the split region
    Sepia { split_percent: f64 },
    /// Component extraction (replicate or isolate)
    Component {
        component: Component,
        mode: ExtractMode,
    },
    /// Histogram-peak color correction over the split region
    ColorCorrect { split_percent: f64 },
    /// Quadratic levels remap over the split region
    AdjustLevels {
        black: i32,
        mid: i32,
        white: i32,
        split_percent: f64,
    },
    /// Haar wavelet compression
    Compress { retain_percent: i32 },
}

/// Run one operation against a buffer, producing a fresh buffer.
///
/// Engines never mutate their input; validation errors surface before
/// any pixel work happens.
pub fn execute(op: &Operation, buffer: &PixelBuffer) -> SessionResult<PixelBuffer> {
    let result = match *op {
        Operation::FlipHorizontal => rasterkit_transform::flip_horizontal(buffer)?,
        Operation::FlipVertical => rasterkit_transform::flip_vertical(buffer)?,
        Operation::Brighten { value } => rasterkit_filter::brighten(buffer, value),
        Operation::Blur { split_percent } => rasterkit_filter::blur(buffer, split_percent),
        Operation::Sharpen { split_percent } => rasterkit_filter::sharpen(buffer, split_percent),
        Operation::Greyscale { split_percent } => rasterkit_color::greyscale(buffer, split_percent),
        Operation::Sepia { split_percent } => rasterkit_color::sepia(buffer, split_percent),
        Operation::Component { component, mode } => extract_component(buffer, component, mode)?,
        Operation::ColorCorrect { split_percent } => {
            rasterkit_color::color_correct_split(buffer, split_percent)
        }
        Operation::AdjustLevels {
            black,
            mid,
            white,
            split_percent,
        } => rasterkit_color::adjust_levels_split(buffer, black, mid, white, split_percent)?,
        Operation::Compress { retain_percent } => {
            rasterkit_wavelet::compress(buffer, retain_percent)?
        }
    };
    Ok(result)
}
