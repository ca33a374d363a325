//! Error Types
//!
//! The lerp state machine itself never fails. Errors only come from checked
//! constructors and from loading [`LerpSettings`](crate::LerpSettings).
//!
//! ```rust,ignore
//! use autolerp::{FloatLerp, LerpError};
//!
//! let err = FloatLerp::try_new(0.0, 1.0, f32::NAN).unwrap_err();
//! assert!(matches!(err, LerpError::InvalidDuration(_)));
//! ```

use thiserror::Error;

/// The error type for fallible lerp construction and settings loading.
#[derive(Error, Debug)]
pub enum LerpError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// Duration is NaN or infinite. Zero and negative durations are accepted.
    #[error("Invalid lerp duration: {0}")]
    InvalidDuration(f32),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings could not be parsed.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, LerpError>`.
pub type Result<T> = std::result::Result<T, LerpError>;
