//! Generator configuration.
//!
//! Read from a JSON file and then adjusted from the command line:
//!
//! ```json
//! {
//!   "enabled": true,
//!   "outputDir": "Intermediate/SpecifierReferenceViewer",
//!   "defines": { "SPECIFIER_EXPORT_JSON": "1" },
//!   "corpus": "Saved/Declarations",
//!   "rules": ["Config/ExtraSpecifiers.json"]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Define that turns on the JSON document when set to `1`.
pub const EXPORT_JSON_DEFINE: &str = "SPECIFIER_EXPORT_JSON";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Intermediate";

/// Errors that can occur while loading or adjusting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A `-D` argument without a name.
    #[error("invalid define `{0}`, expected NAME or NAME=VALUE")]
    InvalidDefine(String),
}

/// Settings for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// When false the pass does nothing and writes nothing.
    pub enabled: bool,

    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,

    /// Build defines of the viewer module, e.g. `SPECIFIER_EXPORT_JSON=1`.
    pub defines: BTreeMap<String, String>,

    /// Corpus file or directory. Without one the metadata catalog is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    /// Extra rule files loaded after the built-in rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<PathBuf>,

    /// Fold the catalogs on the rayon pool.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            defines: BTreeMap::new(),
            corpus: None,
            rules: Vec::new(),
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_define(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.defines.insert(name.into(), value.into());
        self
    }

    /// Applies a `NAME=VALUE` define; a bare `NAME` means `NAME=1`.
    pub fn apply_define(&mut self, define: &str) -> Result<(), ConfigError> {
        let (name, value) = define.split_once('=').unwrap_or((define, "1"));
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::InvalidDefine(define.to_string()));
        }
        self.defines.insert(name.to_string(), value.trim().to_string());
        Ok(())
    }

    /// Integer value of a define, if it is set and numeric.
    pub fn define_int(&self, name: &str) -> Option<i64> {
        self.defines.get(name)?.trim().parse().ok()
    }

    /// Whether the JSON document is produced.
    pub fn export_json(&self) -> bool {
        self.define_int(EXPORT_JSON_DEFINE) == Some(1)
    }
}
