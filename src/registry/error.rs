//! Error types for the specifier rule registry.

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

/// Errors raised while turning registry rules into specifier definitions.
///
/// All of these are configuration errors: the generation pass must abort
/// rather than emit a partial catalog.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A rule extends a table the category table does not know.
    #[error("specifier rule `{rule}` extends unknown table `{table}`")]
    UnknownTable { rule: SmolStr, table: SmolStr },

    /// A rule extends a table that applies to no declaration kind.
    #[error("specifier rule `{rule}` extends table `{table}`, which covers no declaration kind")]
    EmptyTable { rule: SmolStr, table: SmolStr },

    /// The resolved specifier name is not an identifier.
    #[error("specifier rule `{handler}` resolves to invalid name `{name}`")]
    InvalidName { handler: SmolStr, name: SmolStr },

    /// Reading a rules file failed.
    #[error("failed to read rules file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rules file is not valid JSON for the rule schema.
    #[error("failed to parse rules file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// Create an unknown table error.
    pub fn unknown_table(rule: impl Into<SmolStr>, table: impl Into<SmolStr>) -> Self {
        Self::UnknownTable {
            rule: rule.into(),
            table: table.into(),
        }
    }

    /// Create an empty table error.
    pub fn empty_table(rule: impl Into<SmolStr>, table: impl Into<SmolStr>) -> Self {
        Self::EmptyTable {
            rule: rule.into(),
            table: table.into(),
        }
    }

    /// Create an invalid name error.
    pub fn invalid_name(handler: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self::InvalidName {
            handler: handler.into(),
            name: name.into(),
        }
    }
}
