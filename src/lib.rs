//! # specref
//!
//! Builds a deduplicated reference catalog of the declaration specifiers a
//! reflection system understands and the metadata keys its code base uses.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generator → One generation pass: build catalogs, export artifacts
//!   ↓
//! config    → GeneratorConfig, defines, JSON config file
//!   ↓
//! export    → CatalogDocument, code artifact slots, output sinks
//!   ↓
//! catalog   → SpecifierCatalog, MetadataCatalog and their folds
//!   ↓
//! corpus    → Declarations, packages, metadata usage scanning
//!   ↓
//! registry  → Specifier rules, category table, built-in handlers
//!   ↓
//! base      → Primitives (Tag, TagSet, ValueShape)
//! ```

// ============================================================================
// MODULES (dependency order: base → registry → corpus → catalog → export → config → generator)
// ============================================================================

/// Foundation types: Tag, TagSet, ValueShape
pub mod base;

/// Specifier rules and the category table they extend
pub mod registry;

/// Annotated declarations and metadata usage scanning
pub mod corpus;

/// The specifier and metadata catalogs
pub mod catalog;

/// Rendering and writing catalog artifacts
pub mod export;

/// Generator configuration
pub mod config;

/// The generation pass
pub mod generator;

// Re-export foundation types
pub use base::{Tag, TagSet, ValueShape};

// Re-export the pipeline
pub use catalog::{Catalogs, MetadataCatalog, MetadataEntry, SpecifierCatalog, SpecifierEntry};
pub use config::GeneratorConfig;
pub use corpus::{Corpus, Declaration, MetadataUsage, Package};
pub use export::{CatalogDocument, CatalogExporter, FsOutput, MemoryOutput, OutputSink};
pub use generator::{GenerationOutcome, GenerationSummary, Generator, GeneratorError};
pub use registry::{CategoryTable, RuleRegistry, SpecifierRule, StaticRegistry};
