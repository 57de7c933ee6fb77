//! Error types for rasterkit-wavelet

use thiserror::Error;

/// Errors that can occur during wavelet compression
#[derive(Debug, Error)]
pub enum WaveletError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Retain percentage outside [0, 100]
    #[error("retain percentage out of range: {0} (expected 0..=100)")]
    InvalidRetainPercent(i32),
}

/// Result type for wavelet operations
pub type WaveletResult<T> = Result<T, WaveletError>;
