//! rasterkit-core - Core data structures for the rasterkit toolkit
//!
//! This crate provides the shared data model used by every engine:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`]: the immutable 8-bit RGB image
//!   container and its exclusive-mutation companion
//! - Packed-pixel color helpers ([`color`])
//! - Channel/component extraction, split and combine ([`extract`])
//! - Histogram computation ([`Histogram`]) and chart rendering ([`chart`])
//! - The shared split-preview boundary rule ([`split_position`])

pub mod buffer;
pub mod chart;
pub mod color;
mod error;
pub mod extract;
pub mod histogram;
mod split;

pub use buffer::{PixelBuffer, PixelBufferMut};
pub use chart::render_chart;
pub use error::{Error, Result};
pub use extract::{Component, ExtractMode, combine_rgb, extract_component, split_rgb};
pub use histogram::Histogram;
pub use split::{FULL_WIDTH, split_position};
