//! Error types for corpus loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a declaration corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Reading a corpus file or directory failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file is not a valid package document.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The corpus path does not exist.
    #[error("corpus path not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
