//! rasterkit-transform - Geometric transformations
//!
//! Currently provides the two mirror flips used by the
//! horizontal-flip and vertical-flip operations.

mod error;
pub mod flip;

pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_vertical};
