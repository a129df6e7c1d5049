//! Specifier rule registry.
//!
//! The registry is an explicit table of [`SpecifierRule`] records: the
//! built-in handlers plus any rules loaded from JSON. Resolving the
//! registry against a [`CategoryTable`] yields the raw
//! [`SpecifierDefinition`] stream the specifier catalog is folded from.
//!
//! ```text
//! builtins + rules.json ──► SpecifierRule ──resolve(CategoryTable)──► SpecifierDefinition
//! ```

mod builtins;
mod error;
mod rule;
mod table;

use std::path::Path;

pub use builtins::builtin_rules;
pub use error::RegistryError;
pub use rule::{HANDLER_SUFFIX, SpecifierDefinition, SpecifierRule};
pub use table::{CategoryTable, names as table_names};

/// Source of specifier rules.
pub trait RuleRegistry {
    /// Every registered rule, in registration order.
    fn rules(&self) -> &[SpecifierRule];

    /// Resolves every rule against `table`, skipping rules that are not
    /// meant for the catalog.
    ///
    /// Stops at the first rule that extends an unknown table.
    fn definitions(&self, table: &CategoryTable) -> Result<Vec<SpecifierDefinition>, RegistryError> {
        let mut definitions = Vec::with_capacity(self.rules().len());
        for rule in self.rules() {
            if let Some(definition) = rule.resolve(table)? {
                definitions.push(definition);
            }
        }
        Ok(definitions)
    }
}

/// In-memory rule registry.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    rules: Vec<SpecifierRule>,
}

impl StaticRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in rules.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = SpecifierRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Appends the rules in a JSON array file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rules: Vec<SpecifierRule> =
            serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let count = rules.len();
        self.rules.extend(rules);
        tracing::debug!("Loaded {} specifier rules from {}", count, path.display());
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleRegistry for StaticRegistry {
    fn rules(&self) -> &[SpecifierRule] {
        &self.rules
    }
}

impl FromIterator<SpecifierRule> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = SpecifierRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
