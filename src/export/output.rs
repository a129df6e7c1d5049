//! Destinations for exported artifacts.

use std::path::PathBuf;

use indexmap::IndexMap;

use super::error::ExportError;

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Written,
    /// The destination already held identical contents.
    Unchanged,
}

/// Where the exporter commits artifacts, addressed by path relative to the
/// output location.
pub trait OutputSink {
    fn commit(&mut self, relative_path: &str, contents: &str) -> Result<CommitStatus, ExportError>;

    /// Display form of an artifact's location, for logs.
    fn location(&self, relative_path: &str) -> PathBuf;
}

/// Writes artifacts below a directory, creating it on first write.
///
/// Files whose contents would not change are left untouched so their
/// modification time does not trigger downstream rebuilds.
#[derive(Debug, Clone)]
pub struct FsOutput {
    root: PathBuf,
}

impl FsOutput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputSink for FsOutput {
    fn commit(&mut self, relative_path: &str, contents: &str) -> Result<CommitStatus, ExportError> {
        let path = self.root.join(relative_path);

        match std::fs::read(&path) {
            Ok(existing) if existing == contents.as_bytes() => return Ok(CommitStatus::Unchanged),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ExportError::io(path, e)),
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }
        std::fs::write(&path, contents).map_err(|e| ExportError::io(&path, e))?;
        Ok(CommitStatus::Written)
    }

    fn location(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    files: IndexMap<String, String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: &str) -> Option<&str> {
        self.files.get(relative_path).map(String::as_str)
    }

    /// Committed paths, in first-commit order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemoryOutput {
    fn commit(&mut self, relative_path: &str, contents: &str) -> Result<CommitStatus, ExportError> {
        if self.get(relative_path) == Some(contents) {
            return Ok(CommitStatus::Unchanged);
        }
        self.files.insert(relative_path.to_string(), contents.to_string());
        Ok(CommitStatus::Written)
    }

    fn location(&self, relative_path: &str) -> PathBuf {
        PathBuf::from(relative_path)
    }
}
