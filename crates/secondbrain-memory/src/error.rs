//! Memory error types.

use thiserror::Error;

/// Errors that can occur during memory operations.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Required input was missing or empty.
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Embedding generation failed.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector store error.
    #[error("Store error: {0}")]
    Store(String),

    /// Attached image could not be decoded or written.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Summary generation failed.
    #[error("Summarizer error: {0}")]
    Summarizer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MemoryError {
    /// Whether this is a rejection of the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, MemoryError::Validation(_))
    }
}

impl From<secondbrain_core::ConfigError> for MemoryError {
    fn from(err: secondbrain_core::ConfigError) -> Self {
        MemoryError::Config(err.to_string())
    }
}
