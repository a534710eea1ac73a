//! Error types for resource ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an ingestion run.
///
/// Individual unreadable or malformed files are not errors; they are
/// recorded as [`SkippedFile`](crate::SkippedFile)s.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
