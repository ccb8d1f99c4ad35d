//! Error types for corpus operations.
//!
//! This module provides the [`CorpusError`] type for fallible crate operations
//! (configuration loading, export) and the [`Result`] convenience type.
//! Per-filename validation failures are a separate, recoverable type,
//! [`ValidationError`](crate::filename::ValidationError), because a scan never
//! aborts on a bad filename.

use thiserror::Error;

/// Error type for fallible corpus library operations.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Error indicating an unusable scan configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CorpusError`].
pub type Result<T> = std::result::Result<T, CorpusError>;
