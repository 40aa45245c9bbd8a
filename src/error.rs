//! Error types for the binscope analyzer.
//!
//! Structured error handling with thiserror. Only loading the input is fatal;
//! range problems are reported back to the caller and the session continues.

use crate::io::error::IoError;
use thiserror::Error;

/// Main error type for binscope operations.
#[derive(Debug, Error)]
pub enum BinscopeError {
    /// The input buffer could not be loaded
    #[error("Input error: {0}")]
    Input(#[from] IoError),

    /// Hex dump requested at a start offset outside the buffer
    #[error("Offset {start:#x} is outside the buffer (size {len} bytes)")]
    Range { start: usize, len: usize },

    /// Search pattern cannot fit inside the buffer
    #[error("Pattern of {pattern_len} bytes is longer than the buffer ({buffer_len} bytes)")]
    PatternTooLong {
        pattern_len: usize,
        buffer_len: usize,
    },

    /// Search pattern decoded to zero bytes
    #[error("Pattern is empty")]
    EmptyPattern,

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Report sink and console I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BinscopeError {
    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BinscopeError::Range { .. }
                | BinscopeError::PatternTooLong { .. }
                | BinscopeError::EmptyPattern
                | BinscopeError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for BinscopeError {
    fn from(err: serde_json::Error) -> Self {
        BinscopeError::Serialization(err.to_string())
    }
}

/// Result type alias for binscope operations
pub type Result<T> = std::result::Result<T, BinscopeError>;
