//! Error types for shelf-list operations.
//!
//! This module provides the [`BibshelfError`] type for the edges of the library
//! (configuration loading, document writing) and the [`Result`] convenience type.
//! The record transform itself is total and never fails.

use thiserror::Error;

/// Error type for all bibshelf library operations.
#[derive(Error, Debug)]
pub enum BibshelfError {
    /// Error indicating an invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error indicating an invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error during JSON serialization or deserialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error while writing a document after the writer was finished.
    #[error("Writer error: {0}")]
    WriterError(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`BibshelfError`].
pub type Result<T> = std::result::Result<T, BibshelfError>;
