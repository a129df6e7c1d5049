//! Error types for catalog export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing catalog artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing an artifact failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The structured document could not be serialized.
    #[error("failed to serialize catalog document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
