//! The two catalogs and the folds that build them.
//!
//! ```text
//! SpecifierDefinition* ──SpecifierCatalogBuilder──► SpecifierCatalog   (exact name)
//! MetadataUsage*       ──MetadataCatalogBuilder───► MetadataCatalog    (case-insensitive key)
//! ```
//!
//! Both folds only ever widen an entry: tag sets union and value shapes
//! merge. Both operations are commutative and associative, so the finished
//! catalogs do not depend on input order or on how the input was
//! partitioned.

mod metadata;
mod specifier;

pub use metadata::{MetadataCatalog, MetadataCatalogBuilder, MetadataEntry, fold_key};
pub use specifier::{SpecifierCatalog, SpecifierCatalogBuilder, SpecifierEntry};

/// Both catalogs of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub specifiers: SpecifierCatalog,
    pub metadata: MetadataCatalog,
}

impl Catalogs {
    pub fn new(specifiers: SpecifierCatalog, metadata: MetadataCatalog) -> Self {
        Self {
            specifiers,
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty() && self.metadata.is_empty()
    }
}

#[cfg(test)]
mod tests;
