//! Catalog export.
//!
//! The exporter renders the catalogs into artifacts and commits them to an
//! [`OutputSink`]:
//!
//! | artifact                 | written when                              |
//! |--------------------------|-------------------------------------------|
//! | [`JSON_ARTIFACT`]        | JSON export is enabled                    |
//! | [`KNOWN_LISTS_ARTIFACT`] | the code generator produces known lists   |
//! | [`USAGES_ARTIFACT`]      | the code generator produces usage listing |

mod codegen;
mod document;
mod error;
mod output;

use std::path::PathBuf;

pub use codegen::{CodeArtifactGenerator, KNOWN_LISTS_ARTIFACT, PendingCodegen, USAGES_ARTIFACT};
pub use document::CatalogDocument;
pub use error::ExportError;
pub use output::{CommitStatus, FsOutput, MemoryOutput, OutputSink};

use crate::catalog::Catalogs;
use crate::corpus::MetadataUsage;

/// File holding the structured catalog document.
pub const JSON_ARTIFACT: &str = "specifiers.json";

/// Rendered artifact contents, before anything is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCatalog {
    /// The structured document, when JSON export is enabled.
    pub document: Option<String>,
    pub known_lists: Option<String>,
    pub usages: Option<String>,
}

/// What an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Artifacts committed, with whether their contents changed.
    pub committed: Vec<(PathBuf, CommitStatus)>,
    /// Artifact slots that had no generator.
    pub pending: Vec<&'static str>,
}

impl ExportReport {
    pub fn written(&self) -> usize {
        self.committed
            .iter()
            .filter(|(_, status)| *status == CommitStatus::Written)
            .count()
    }
}

/// Renders and writes catalog artifacts.
pub struct CatalogExporter {
    codegen: Box<dyn CodeArtifactGenerator>,
    export_json: bool,
}

impl CatalogExporter {
    /// Exporter with the pending code generator and JSON export disabled.
    pub fn new() -> Self {
        Self {
            codegen: Box::new(PendingCodegen),
            export_json: false,
        }
    }

    pub fn with_json(mut self, enabled: bool) -> Self {
        self.export_json = enabled;
        self
    }

    pub fn with_codegen(mut self, codegen: impl CodeArtifactGenerator + 'static) -> Self {
        self.codegen = Box::new(codegen);
        self
    }

    /// Produces artifact contents without writing them.
    pub fn render(
        &self,
        catalogs: &Catalogs,
        usages: &[MetadataUsage],
    ) -> Result<RenderedCatalog, ExportError> {
        let document = if self.export_json {
            Some(CatalogDocument::from_catalogs(catalogs).to_json()?)
        } else {
            None
        };

        Ok(RenderedCatalog {
            document,
            known_lists: self.codegen.known_lists(catalogs),
            usages: self.codegen.metadata_usages(usages),
        })
    }

    /// Renders every artifact and commits it to `sink`.
    ///
    /// Stops at the first failed write.
    pub fn export(
        &self,
        catalogs: &Catalogs,
        usages: &[MetadataUsage],
        sink: &mut dyn OutputSink,
    ) -> Result<ExportReport, ExportError> {
        let rendered = self.render(catalogs, usages)?;
        let mut report = ExportReport::default();

        let slots = [
            (USAGES_ARTIFACT, rendered.usages, true),
            (KNOWN_LISTS_ARTIFACT, rendered.known_lists, true),
            (JSON_ARTIFACT, rendered.document, false),
        ];

        for (artifact, contents, generated) in slots {
            match contents {
                Some(contents) => {
                    let status = sink.commit(artifact, &contents)?;
                    let location = sink.location(artifact);
                    match status {
                        CommitStatus::Written => {
                            tracing::info!("Exported file {}", location.display())
                        }
                        CommitStatus::Unchanged => {
                            tracing::debug!("Unchanged file {}", location.display())
                        }
                    }
                    report.committed.push((location, status));
                }
                None if generated => {
                    tracing::warn!("No code generator for {}; nothing written", artifact);
                    report.pending.push(artifact);
                }
                None => {}
            }
        }

        Ok(report)
    }
}

impl Default for CatalogExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogExporter")
            .field("export_json", &self.export_json)
            .finish_non_exhaustive()
    }
}
