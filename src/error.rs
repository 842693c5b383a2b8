//! Error types for the Ortho library.
//!
//! All failures are represented by the [`OrthoError`] enum. Checking a
//! well-formed input cannot fail beyond the input-validation variants:
//! distance computation and vocabulary lookup never error, and the absence
//! of a match is a normal, non-error outcome.
//!
//! # Examples
//!
//! ```
//! use ortho::error::{OrthoError, Result};
//!
//! fn validate(text: &str) -> Result<()> {
//!     if text.trim().is_empty() {
//!         return Err(OrthoError::EmptyInput);
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate("   ").is_err());
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Ortho operations.
#[derive(Error, Debug)]
pub enum OrthoError {
    /// Input text was empty or contained only whitespace.
    ///
    /// An empty question is a user-input error, never a valid
    /// "no corrections" result; callers map this to their own
    /// validation signal.
    #[error("empty input: the text to check is blank")]
    EmptyInput,

    /// Input text exceeded the configured length cap.
    #[error("input too large: {len} chars exceeds the cap of {max}")]
    InputTooLarge {
        /// Length of the rejected input, in chars.
        len: usize,
        /// The configured cap, in chars.
        max: usize,
    },

    /// I/O errors (vocabulary, configuration, and preset files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthoError.
pub type Result<T> = std::result::Result<T, OrthoError>;

impl OrthoError {
    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthoError::InvalidOperation(msg.into())
    }

    /// Create a new input-too-large error.
    pub fn input_too_large(len: usize, max: usize) -> Self {
        OrthoError::InputTooLarge { len, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrthoError::EmptyInput;
        assert!(err.to_string().contains("blank"));

        let err = OrthoError::input_too_large(50, 10);
        assert!(err.to_string().contains("50"));
        assert!(err.to_string().contains("10"));

        let err = OrthoError::invalid_operation("role is locked");
        assert!(err.to_string().contains("role is locked"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: OrthoError = io_err.into();
        assert!(matches!(err, OrthoError::Io(_)));
    }
}
