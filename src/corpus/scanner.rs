//! Walks a corpus and yields one usage record per metadata pair.

use smol_str::SmolStr;

use super::DeclarationCorpus;
use super::declaration::Declaration;
use crate::base::Tag;

/// One occurrence of a metadata key on a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataUsage {
    pub key: SmolStr,
    /// Raw annotation text; empty for flags.
    pub value: String,
    /// Kind of the declaration carrying the key.
    pub tag: Tag,
}

impl MetadataUsage {
    pub fn new(key: impl Into<SmolStr>, value: impl Into<String>, tag: Tag) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            tag,
        }
    }
}

/// Turns declarations into [`MetadataUsage`] records.
///
/// Usages come out in corpus order: package by package, each declaration
/// before its children, metadata pairs in annotation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataUsageScanner;

impl MetadataUsageScanner {
    pub fn new() -> Self {
        Self
    }

    /// Usages attached directly to one declaration.
    pub fn declaration_usages(
        &self,
        declaration: &Declaration,
    ) -> impl Iterator<Item = MetadataUsage> {
        declaration
            .metadata
            .iter()
            .map(move |(key, value)| MetadataUsage::new(key.clone(), value.clone(), declaration.kind))
    }

    /// Lazily scans every declaration of every package.
    pub fn scan<'a, C>(&'a self, corpus: &'a C) -> impl Iterator<Item = MetadataUsage> + 'a
    where
        C: DeclarationCorpus + ?Sized,
    {
        corpus
            .packages()
            .iter()
            .flat_map(|package| package.walk())
            .flat_map(move |declaration| self.declaration_usages(declaration))
    }

    /// Scans the corpus into a vector.
    pub fn collect<C>(&self, corpus: &C) -> Vec<MetadataUsage>
    where
        C: DeclarationCorpus + ?Sized,
    {
        let usages: Vec<_> = self.scan(corpus).collect();
        tracing::debug!(
            "Found {} metadata usages in {} packages",
            usages.len(),
            corpus.packages().len()
        );
        usages
    }
}
