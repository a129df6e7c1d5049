//! Deduplicated catalog of specifiers.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{TagSet, ValueShape};
use crate::registry::{CategoryTable, RegistryError, RuleRegistry, SpecifierDefinition};

/// One unique specifier and everywhere it is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecifierEntry {
    #[serde(rename = "specifierName")]
    pub name: SmolStr,
    #[serde(rename = "tag")]
    pub tags: TagSet,
    #[serde(rename = "valueType")]
    pub value_shape: ValueShape,
}

impl SpecifierEntry {
    fn from_definition(definition: SpecifierDefinition) -> Self {
        Self {
            name: definition.name,
            tags: definition.tags,
            value_shape: definition.value_shape,
        }
    }

    /// This entry widened by another occurrence of the same name.
    #[must_use]
    pub fn widened(&self, tags: TagSet, value_shape: ValueShape) -> Self {
        Self {
            name: self.name.clone(),
            tags: self.tags.union_with(tags),
            value_shape: self.value_shape.merge(value_shape),
        }
    }
}

type EntryMap = IndexMap<SmolStr, SpecifierEntry, FxBuildHasher>;

/// Specifier entries keyed by exact name, in first-definition order.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecifierCatalog {
    entries: EntryMap,
}

impl SpecifierCatalog {
    /// Folds definitions into a catalog. See [`SpecifierCatalogBuilder`].
    pub fn build(definitions: impl IntoIterator<Item = SpecifierDefinition>) -> Self {
        let mut builder = SpecifierCatalogBuilder::new();
        builder.extend(definitions);
        builder.finish()
    }

    /// Same result as [`SpecifierCatalog::build`], folding partitions of the
    /// input on the rayon pool.
    pub fn build_parallel(definitions: &[SpecifierDefinition]) -> Self {
        definitions
            .par_iter()
            .fold(SpecifierCatalogBuilder::new, |mut builder, definition| {
                builder.add(definition.clone());
                builder
            })
            .reduce(SpecifierCatalogBuilder::new, SpecifierCatalogBuilder::merged)
            .finish()
    }

    /// Resolves every rule of `registry` and folds the result.
    pub fn from_registry<R>(registry: &R, table: &CategoryTable) -> Result<Self, RegistryError>
    where
        R: RuleRegistry + ?Sized,
    {
        let definitions = registry.definitions(table)?;
        let catalog = Self::build(definitions);
        tracing::debug!(
            "Built specifier catalog: {} entries from {} rules",
            catalog.len(),
            registry.rules().len()
        );
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&SpecifierEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in first-definition order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &SpecifierEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpecifierCatalog {
    type Item = &'a SpecifierEntry;
    type IntoIter = indexmap::map::Values<'a, SmolStr, SpecifierEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<SpecifierDefinition> for SpecifierCatalog {
    fn from_iter<I: IntoIterator<Item = SpecifierDefinition>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Incremental fold of specifier definitions.
///
/// A new name is inserted as-is. A name seen before is replaced by an entry
/// whose tags are the union of both and whose shape is the merge of both.
/// Names compare exactly.
#[derive(Debug, Clone, Default)]
pub struct SpecifierCatalogBuilder {
    entries: EntryMap,
}

impl SpecifierCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, definition: SpecifierDefinition) {
        if let Some(existing) = self.entries.get_mut(definition.name.as_str()) {
            let widened = existing.widened(definition.tags, definition.value_shape);
            tracing::trace!(
                specifier = %definition.name,
                tags = %widened.tags,
                shape = %widened.value_shape,
                "widened specifier"
            );
            *existing = widened;
        } else {
            self.entries.insert(
                definition.name.clone(),
                SpecifierEntry::from_definition(definition),
            );
        }
    }

    pub fn extend(&mut self, definitions: impl IntoIterator<Item = SpecifierDefinition>) {
        for definition in definitions {
            self.add(definition);
        }
    }

    /// Folds `other` into `self`. Entries of `self` keep their position;
    /// names only in `other` follow in `other`'s order.
    #[must_use]
    pub fn merged(mut self, other: SpecifierCatalogBuilder) -> Self {
        for (name, entry) in other.entries {
            self.add(SpecifierDefinition {
                name,
                tags: entry.tags,
                value_shape: entry.value_shape,
            });
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> SpecifierCatalog {
        SpecifierCatalog {
            entries: self.entries,
        }
    }
}
