//! Error types for the lexidb search engine
//!
//! This module defines all error types used throughout the crate.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::document::DocumentId;
use thiserror::Error;

/// Result type alias for lexidb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the lexidb search engine
#[derive(Debug, Error)]
pub enum Error {
    /// Document id is negative
    #[error("invalid document id: {0}")]
    InvalidId(DocumentId),

    /// Document id is already present in the index
    #[error("duplicate document id: {0}")]
    DuplicateId(DocumentId),

    /// Stop-word candidate contains a control character
    #[error("invalid stop word: {0:?}")]
    InvalidStopWord(String),

    /// Document token contains a control character
    #[error("invalid document word: {0:?}")]
    InvalidDocumentWord(String),

    /// Query token is malformed (control character, bare `-`, or `--` prefix)
    #[error("invalid query word: {0:?}")]
    InvalidQueryWord(String),

    /// Document id is not present in the index
    #[error("document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Positional roster lookup outside `[0, count)`
    #[error("document index {index} out of range (document count: {count})")]
    OutOfRange {
        /// Requested roster position
        index: usize,
        /// Number of indexed documents
        count: usize,
    },

    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
