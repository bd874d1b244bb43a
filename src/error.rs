//! Error types for quotebox.

use thiserror::Error;

/// Errors surfaced by quotebox operations.
#[derive(Debug, Error)]
pub enum QuoteboxError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The storage database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// User input was rejected.
    #[error("{0}")]
    Validation(String),

    /// An import document could not be parsed. Nothing was imported.
    #[error("Invalid JSON file: {0}")]
    InvalidImport(String),

    /// The remote endpoint could not be reached or returned garbage.
    #[error("Remote error: {0}")]
    Remote(String),
}

impl From<rusqlite::Error> for QuoteboxError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl From<reqwest::Error> for QuoteboxError {
    fn from(e: reqwest::Error) -> Self {
        Self::Remote(e.to_string())
    }
}
