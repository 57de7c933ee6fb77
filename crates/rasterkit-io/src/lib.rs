//! rasterkit-io - Image I/O
//!
//! Codecs for the formats the toolkit loads and saves:
//!
//! - ASCII PPM (P3), the toolkit's native text format
//! - PNG via the `png` crate
//! - JPEG via `jpeg-decoder` / `jpeg-encoder`
//! - Uncompressed BMP
//!
//! [`decode`] / [`encode`] work on in-memory bytes; [`read_image`] /
//! [`write_image`] add path handling with format sniffing and
//! extension inference.

pub mod bmp;
mod error;
pub mod format;
pub mod jpeg;
pub mod png;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, decode, encode, read_image, sniff_format, write_image};
