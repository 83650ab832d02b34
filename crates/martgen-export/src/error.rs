//! Error types for table export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a table to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Filesystem failure (permissions, missing volume, disk full).
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure.
    #[error("CSV error writing '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization failure.
    #[error("JSON error writing '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
