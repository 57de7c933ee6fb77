//! rasterkit-filter - Convolution filtering
//!
//! This crate provides the convolution engine and the point operations
//! built on top of it:
//!
//! - Split-aware convolution with arbitrary odd-square kernels
//! - Blur (3x3 kernel) and sharpen (5x5 kernel)
//! - Brighten/darken

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;

pub use convolve::{apply_kernel, apply_kernel_split, blur, sharpen};
pub use enhance::brighten;
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
