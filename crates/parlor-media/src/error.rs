//! Error types for media loading

use thiserror::Error;

/// Errors that can occur while loading or decoding media
#[derive(Debug, Error)]
pub enum MediaError {
    /// IO error while reading a file from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No cached data for the requested file
    #[error("Unknown file: {0}")]
    UnknownFile(i32),

    /// Attempted to cache a zero-length blob
    #[error("Empty blob for file {0}")]
    EmptyBlob(i32),
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;
