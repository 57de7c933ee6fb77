//! Error types for rasterkit-color

use thiserror::Error;

/// Errors that can occur during color operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Levels control points out of range or not strictly ordered
    #[error("invalid levels control points: black={black}, mid={mid}, white={white}")]
    InvalidLevels { black: i32, mid: i32, white: i32 },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
