//! Error types for rasterkit-session

use thiserror::Error;

/// Errors surfaced by the session layer
#[derive(Debug, Error)]
pub enum SessionError {
    /// Referenced image name absent from the session
    #[error("image not found: {0}")]
    NotFound(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Transform engine error
    #[error("transform error: {0}")]
    Transform(#[from] rasterkit_transform::TransformError),

    /// Filter engine error
    #[error("filter error: {0}")]
    Filter(#[from] rasterkit_filter::FilterError),

    /// Color engine error
    #[error("color error: {0}")]
    Color(#[from] rasterkit_color::ColorError),

    /// Wavelet engine error
    #[error("wavelet error: {0}")]
    Wavelet(#[from] rasterkit_wavelet::WaveletError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
