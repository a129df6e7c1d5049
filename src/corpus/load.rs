//! Loading corpus packages from JSON files.

use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use super::declaration::Package;
use super::error::CorpusError;

/// Extension of corpus files inside a corpus directory.
pub const CORPUS_EXTENSION: &str = "json";

/// A corpus file holds either one package or an array of packages.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Many(Vec<Package>),
    One(Package),
}

/// Loads the packages in one corpus file.
pub fn load_file(path: &Path) -> Result<Vec<Package>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
    let document: CorpusDocument =
        serde_json::from_str(&content).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match document {
        CorpusDocument::Many(packages) => packages,
        CorpusDocument::One(package) => vec![package],
    })
}

/// Loads a corpus file, or every `*.json` file below a directory.
///
/// Directory entries are visited in file-name order so the resulting
/// package order does not depend on the filesystem.
pub fn load_path(path: &Path) -> Result<Vec<Package>, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::NotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return load_file(path);
    }

    let mut packages = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let at = e.path().unwrap_or(path).to_path_buf();
            CorpusError::io(at, e.into())
        })?;
        let is_corpus_file = entry.file_type().is_file()
            && entry.path().extension().and_then(|ext| ext.to_str()) == Some(CORPUS_EXTENSION);
        if is_corpus_file {
            packages.extend(load_file(entry.path())?);
        }
    }

    tracing::debug!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
