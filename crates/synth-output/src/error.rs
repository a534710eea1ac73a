//! Error types for export operations.

use std::path::PathBuf;

use synth_model::ModelError;
use thiserror::Error;

/// Errors that can occur while writing bundles, resource files or summaries.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create a directory or write a file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a document to JSON.
    #[error("failed to serialize {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the CSV summary.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A typed resource could not be converted to JSON.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, OutputError>;

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
