//! Error types for markdown content analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analyzing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input path does not resolve to a file.
    #[error("File '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// A captured numeric token could not be parsed as a number.
    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    /// Failed to render a record as JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
