//! rasterkit-wavelet - Haar wavelet compression
//!
//! Lossy compression built from a 2-D Haar transform: pad each channel
//! plane to a power-of-two square, transform, zero the coefficients
//! below a significance cutoff, invert, crop, recombine.

pub mod compress;
mod error;
pub mod haar;

pub use compress::compress;
pub use error::{WaveletError, WaveletResult};
pub use haar::{forward_1d, forward_2d, inverse_1d, inverse_2d};
