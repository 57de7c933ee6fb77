//! Rasterkit - an 8-bit RGB image editing toolkit
//!
//! # Overview
//!
//! Rasterkit provides the operations of a small image editor as pure
//! functions over an immutable pixel buffer:
//!
//! - Flips, brighten/darken, greyscale and sepia, blur and sharpen
//! - Channel splitting, combination and component extraction
//! - Histograms, histogram charts and peak-based color correction
//! - Quadratic levels adjustment
//! - Lossy Haar wavelet compression
//! - PPM/PNG/JPEG/BMP codecs and a named-image session layer
//!
//! # Example
//!
//! ```
//! use rasterkit::{PixelBuffer, filter};
//!
//! let photo = PixelBuffer::new(640, 480).unwrap();
//! let soft = filter::blur(&photo, 100.0);
//! assert_eq!(soft.width(), 640);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
pub use rasterkit_io as io;
pub use rasterkit_session as session;
pub use rasterkit_transform as transform;
pub use rasterkit_wavelet as wavelet;
