//! Generated-source artifacts for the viewer module.
//!
//! The viewer is meant to compile the catalog in directly instead of reading
//! the JSON document at runtime. The source format is not settled yet, so
//! the exporter only knows the two artifact slots and asks a
//! [`CodeArtifactGenerator`] for their contents.

use crate::catalog::Catalogs;
use crate::corpus::MetadataUsage;

/// File holding the known specifier and metadata lists.
pub const KNOWN_LISTS_ARTIFACT: &str = "specifiers.inc";

/// File holding every metadata usage.
pub const USAGES_ARTIFACT: &str = "references.inc";

/// Produces the text of the generated-source artifacts.
///
/// Returning `None` means the slot has no generator; the exporter then
/// writes nothing for it rather than an empty file.
pub trait CodeArtifactGenerator: Send + Sync {
    /// Contents of [`KNOWN_LISTS_ARTIFACT`].
    fn known_lists(&self, catalogs: &Catalogs) -> Option<String>;

    /// Contents of [`USAGES_ARTIFACT`].
    fn metadata_usages(&self, usages: &[MetadataUsage]) -> Option<String>;
}

/// Generator with no output for either slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingCodegen;

impl CodeArtifactGenerator for PendingCodegen {
    fn known_lists(&self, _catalogs: &Catalogs) -> Option<String> {
        None
    }

    fn metadata_usages(&self, _usages: &[MetadataUsage]) -> Option<String> {
        None
    }
}
