//! Error types for fuzzy hashing and comparison.
//!
//! This module provides structured error handling using thiserror. Every
//! condition the hashing core detects is reported to the immediate caller;
//! whether a condition is fatal is decided by the caller's [`HashConfig`].
//!
//! [`HashConfig`]: crate::config::HashConfig

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for ctph operations.
#[derive(Debug, Error)]
pub enum CtphError {
    /// Input is at or below the minimum size that produces a meaningful digest.
    #[error("Input too small: {len} bytes (more than {min} bytes required for a meaningful digest)")]
    TooSmallInput { len: usize, min: usize },

    /// Malformed textual digest
    #[error("Invalid fuzzy hash format: {0}")]
    InvalidFormat(String),

    /// File or reader I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl CtphError {
    pub(crate) fn invalid_format(msg: impl Into<String>) -> Self {
        CtphError::InvalidFormat(msg.into())
    }

    /// True for conditions a non-strict caller may treat as a warning.
    pub fn is_tolerable(&self) -> bool {
        matches!(self, CtphError::TooSmallInput { .. })
    }
}

impl From<std::io::Error> for CtphError {
    fn from(err: std::io::Error) -> Self {
        CtphError::Io(IoError::StdIo(err))
    }
}

/// Result type alias for ctph operations
pub type Result<T> = std::result::Result<T, CtphError>;
