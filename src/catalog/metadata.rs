//! Deduplicated catalog of metadata keys.
//!
//! Keys are case-insensitive: `ToolTip` and `tooltip` are one entry,
//! displayed with whichever casing was seen first.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{Tag, TagSet, ValueShape};
use crate::corpus::MetadataUsage;

/// One unique metadata key and everywhere it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// First-seen casing of the key.
    #[serde(rename = "metadataName")]
    pub name: SmolStr,
    #[serde(rename = "tag")]
    pub tags: TagSet,
    #[serde(rename = "valueType")]
    pub value_shape: ValueShape,
}

impl MetadataEntry {
    #[must_use]
    pub fn widened(&self, tags: TagSet, value_shape: ValueShape) -> Self {
        Self {
            name: self.name.clone(),
            tags: self.tags.union_with(tags),
            value_shape: self.value_shape.merge(value_shape),
        }
    }
}

/// Identity of a metadata key: each character mapped to lowercase on its own.
///
/// The mapping ignores context, so `ΑΣ`, `ασ` and `Ασ` share one identity.
pub fn fold_key(key: &str) -> SmolStr {
    key.chars().flat_map(char::to_lowercase).collect()
}

type EntryMap = IndexMap<SmolStr, MetadataEntry, FxBuildHasher>;

/// Metadata entries keyed by folded key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataCatalog {
    entries: EntryMap,
}

impl MetadataCatalog {
    /// Folds usages into a catalog. See [`MetadataCatalogBuilder`].
    pub fn build(usages: impl IntoIterator<Item = MetadataUsage>) -> Self {
        let mut builder = MetadataCatalogBuilder::new();
        for usage in usages {
            builder.add(&usage);
        }
        builder.finish()
    }

    /// Same result as [`MetadataCatalog::build`], folding partitions of the
    /// input on the rayon pool.
    pub fn build_parallel(usages: &[MetadataUsage]) -> Self {
        usages
            .par_iter()
            .fold(MetadataCatalogBuilder::new, |mut builder, usage| {
                builder.add(usage);
                builder
            })
            .reduce(MetadataCatalogBuilder::new, MetadataCatalogBuilder::merged)
            .finish()
    }

    /// Looks a key up, ignoring case.
    pub fn get(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.get(fold_key(key).as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Folded keys, in first-seen order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(SmolStr::as_str)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MetadataEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MetadataCatalog {
    type Item = &'a MetadataEntry;
    type IntoIter = indexmap::map::Values<'a, SmolStr, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<MetadataUsage> for MetadataCatalog {
    fn from_iter<I: IntoIterator<Item = MetadataUsage>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Incremental fold of metadata usages.
///
/// Each usage contributes its owner's tag and the classified shape of its
/// value. There is no rejection path: every value classifies.
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalogBuilder {
    entries: EntryMap,
}

impl MetadataCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, usage: &MetadataUsage) {
        self.observe(&usage.key, usage.tag.as_set(), ValueShape::classify(&usage.value));
    }

    pub fn extend<'a>(&mut self, usages: impl IntoIterator<Item = &'a MetadataUsage>) {
        for usage in usages {
            self.add(usage);
        }
    }

    /// Records one occurrence of `key` on a declaration of kind `tag`.
    pub fn add_raw(&mut self, key: &str, value: &str, tag: Tag) {
        self.observe(key, tag.as_set(), ValueShape::classify(value));
    }

    fn observe(&mut self, key: &str, tags: TagSet, value_shape: ValueShape) {
        let folded = fold_key(key);
        if let Some(existing) = self.entries.get_mut(folded.as_str()) {
            *existing = existing.widened(tags, value_shape);
        } else {
            self.entries.insert(
                folded,
                MetadataEntry {
                    name: SmolStr::new(key),
                    tags,
                    value_shape,
                },
            );
        }
    }

    /// Folds `other` into `self`, keeping `self`'s display casing for keys
    /// both have seen.
    #[must_use]
    pub fn merged(mut self, other: MetadataCatalogBuilder) -> Self {
        for (_, entry) in other.entries {
            self.observe(&entry.name, entry.tags, entry.value_shape);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> MetadataCatalog {
        MetadataCatalog {
            entries: self.entries,
        }
    }
}
