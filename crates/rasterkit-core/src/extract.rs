//! Channel and component extraction
//!
//! Every pixel of an RGB image carries six derivable greyscale components:
//! the three channels themselves plus value (max), intensity (mean) and
//! luma (weighted mean). Extraction produces a new image from one
//! component in one of two modes:
//!
//! - [`ExtractMode::Replicate`] writes the component into all three output
//!   channels, producing a grey rendition.
//! - [`ExtractMode::Isolate`] keeps a channel's value in its own slot and
//!   zeroes the other two, producing a single-channel plane. Isolated
//!   planes can later be summed slot-wise to reconstruct a full RGB image;
//!   the wavelet compressor relies on this.
//!
//! `split_rgb` / `combine_rgb` build on the same machinery for the
//! rgb-split and rgb-combine operations.

use crate::buffer::{PixelBuffer, PixelBufferMut};
use crate::error::{Error, Result};

/// Luma weights (ITU-R BT.709).
const LUMA_RED: f64 = 0.2126;
const LUMA_GREEN: f64 = 0.7152;
const LUMA_BLUE: f64 = 0.0722;

/// A derivable greyscale component of an RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// The red channel
    Red,
    /// The green channel
    Green,
    /// The blue channel
    Blue,
    /// max(r, g, b)
    Value,
    /// Truncated mean (r + g + b) / 3
    Intensity,
    /// floor(0.2126 r + 0.7152 g + 0.0722 b)
    Luma,
}

impl Component {
    /// Evaluate the component for one pixel.
    #[inline]
    pub fn of(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            Component::Red => r,
            Component::Green => g,
            Component::Blue => b,
            Component::Value => r.max(g).max(b),
            Component::Intensity => ((r as u32 + g as u32 + b as u32) / 3) as u8,
            Component::Luma => {
                (LUMA_RED * r as f64 + LUMA_GREEN * g as f64 + LUMA_BLUE * b as f64) as u8
            }
        }
    }
}

/// How an extracted component is written into the output pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractMode {
    /// Write the component into all three channels (grey rendition)
    Replicate,
    /// Keep the channel in its own slot, zero the other two
    Isolate,
}

/// Extract a component image.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for `Isolate` with a derived
/// component (`Value`, `Intensity`, `Luma`): derived components have no
/// home channel slot to isolate into.
pub fn extract_component(
    src: &PixelBuffer,
    component: Component,
    mode: ExtractMode,
) -> Result<PixelBuffer> {
    if mode == ExtractMode::Isolate
        && !matches!(
            component,
            Component::Red | Component::Green | Component::Blue
        )
    {
        return Err(Error::InvalidParameter(format!(
            "cannot isolate derived component {component:?}"
        )));
    }

    let mut out = PixelBufferMut::new(src.width(), src.height())?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r, g, b) = src.get_rgb_unchecked(x, y);
            let v = component.of(r, g, b);
            match mode {
                ExtractMode::Replicate => out.set_rgb_unchecked(x, y, v, v, v),
                ExtractMode::Isolate => match component {
                    Component::Red => out.set_rgb_unchecked(x, y, v, 0, 0),
                    Component::Green => out.set_rgb_unchecked(x, y, 0, v, 0),
                    Component::Blue => out.set_rgb_unchecked(x, y, 0, 0, v),
                    _ => unreachable!(),
                },
            }
        }
    }
    Ok(out.into())
}

/// Split an image into its three isolated channel planes.
pub fn split_rgb(src: &PixelBuffer) -> (PixelBuffer, PixelBuffer, PixelBuffer) {
    // Isolate of a plain channel cannot fail
    let red = extract_component(src, Component::Red, ExtractMode::Isolate).unwrap();
    let green = extract_component(src, Component::Green, ExtractMode::Isolate).unwrap();
    let blue = extract_component(src, Component::Blue, ExtractMode::Isolate).unwrap();
    (red, green, blue)
}

/// Combine three channel images into one RGB image.
///
/// Takes the red channel of `red`, the green channel of `green` and the
/// blue channel of `blue`. Inputs may be isolated planes or replicated
/// grey images; only the home slot of each is read.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the inputs do not all have the
/// same dimensions.
pub fn combine_rgb(
    red: &PixelBuffer,
    green: &PixelBuffer,
    blue: &PixelBuffer,
) -> Result<PixelBuffer> {
    for plane in [green, blue] {
        if !red.sizes_equal(plane) {
            return Err(Error::DimensionMismatch {
                expected: (red.width(), red.height()),
                actual: (plane.width(), plane.height()),
            });
        }
    }

    let mut out = PixelBufferMut::new(red.width(), red.height())?;
    for y in 0..red.height() {
        for x in 0..red.width() {
            let (r, _, _) = red.get_rgb_unchecked(x, y);
            let (_, g, _) = green.get_rgb_unchecked(x, y);
            let (_, _, b) = blue.get_rgb_unchecked(x, y);
            out.set_rgb_unchecked(x, y, r, g, b);
        }
    }
    Ok(out.into())
}
