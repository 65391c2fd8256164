//! Error types for byte transforms.

use thiserror::Error;

/// Errors that can occur while undoing a byte transform.
#[derive(Debug, Error)]
pub enum Error {
    /// Rotation over groups wider than one byte.
    #[error("unable to rotate group of {group_size} bytes yet")]
    UnsupportedGroupSize { group_size: usize },

    /// Repeating XOR with an empty key.
    #[error("XOR key must not be empty")]
    EmptyKey,

    /// Decompression error.
    #[error("decompression error: {0}")]
    Decompression(String),
}

/// Result type for byte transforms.
pub type Result<T> = std::result::Result<T, Error>;
