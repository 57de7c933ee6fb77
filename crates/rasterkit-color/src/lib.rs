//! rasterkit-color - Color transforms, correction and levels
//!
//! This crate provides the color-domain engines:
//!
//! - Linear matrix transforms (greyscale, sepia) with split preview
//! - Histogram-peak color correction
//! - Quadratic levels adjustment

pub mod correct;
mod error;
pub mod levels;
pub mod matrix;

pub use correct::{color_correct, color_correct_split, find_peak};
pub use error::{ColorError, ColorResult};
pub use levels::{adjust_levels, adjust_levels_split};
pub use matrix::{ColorMatrix, apply_matrix, apply_matrix_split, greyscale, sepia};
