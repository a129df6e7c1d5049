//! The generation pass.
//!
//! ```text
//! RuleRegistry ──► SpecifierCatalog ─┐
//!                                    ├─► CatalogExporter ──► OutputSink
//! Corpus ──► MetadataUsage* ──► MetadataCatalog ─┘
//! ```
//!
//! One pass, run to completion. Any error aborts the pass before or while
//! writing; nothing is reported as success after a failure.

use thiserror::Error;

use crate::catalog::{Catalogs, MetadataCatalog, MetadataCatalogBuilder, SpecifierCatalog};
use crate::config::GeneratorConfig;
use crate::corpus::{Corpus, CorpusError, DeclarationCorpus, MetadataUsage, MetadataUsageScanner};
use crate::export::{
    CatalogExporter, CodeArtifactGenerator, ExportError, ExportReport, FsOutput, OutputSink,
};
use crate::registry::{CategoryTable, RegistryError, RuleRegistry, StaticRegistry};

/// Any failure of a generation pass.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Counts and writes of a completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub specifiers: usize,
    pub metadata: usize,
    pub usages: usize,
    pub export: ExportReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The pass is switched off; nothing was read or written.
    Disabled,
    Completed(GenerationSummary),
}

impl GenerationOutcome {
    pub fn summary(&self) -> Option<&GenerationSummary> {
        match self {
            GenerationOutcome::Disabled => None,
            GenerationOutcome::Completed(summary) => Some(summary),
        }
    }
}

/// Runs generation passes for one configuration.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    table: CategoryTable,
    exporter: CatalogExporter,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let exporter = CatalogExporter::new().with_json(config.export_json());
        Self {
            config,
            table: CategoryTable::standard(),
            exporter,
        }
    }

    pub fn with_table(mut self, table: CategoryTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_codegen(mut self, codegen: impl CodeArtifactGenerator + 'static) -> Self {
        self.exporter = self.exporter.with_codegen(codegen);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds both catalogs without exporting them.
    pub fn build_catalogs(
        &self,
        registry: &dyn RuleRegistry,
        corpus: &dyn DeclarationCorpus,
    ) -> Result<(Catalogs, Vec<MetadataUsage>), GeneratorError> {
        let definitions = registry.definitions(&self.table)?;
        let usages = MetadataUsageScanner::new().collect(corpus);

        let catalogs = if self.config.parallel {
            Catalogs::new(
                SpecifierCatalog::build_parallel(&definitions),
                MetadataCatalog::build_parallel(&usages),
            )
        } else {
            let mut metadata = MetadataCatalogBuilder::new();
            metadata.extend(&usages);
            Catalogs::new(SpecifierCatalog::build(definitions), metadata.finish())
        };

        tracing::debug!(
            "Catalogs built: {} specifiers, {} metadata keys",
            catalogs.specifiers.len(),
            catalogs.metadata.len()
        );
        Ok((catalogs, usages))
    }

    /// Runs the pass against explicit collaborators.
    ///
    /// Failures are logged and returned.
    pub fn run(
        &self,
        registry: &dyn RuleRegistry,
        corpus: &dyn DeclarationCorpus,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerationOutcome, GeneratorError> {
        if !self.config.enabled {
            tracing::debug!("Specifier reference generation is disabled");
            return Ok(GenerationOutcome::Disabled);
        }

        self.generate(registry, corpus, sink)
            .map(GenerationOutcome::Completed)
            .inspect_err(|e| tracing::error!("Specifier reference generation failed: {e}"))
    }

    /// Runs the pass with the collaborators the configuration names: the
    /// built-in rules plus configured rule files, the configured corpus, and
    /// the output directory.
    pub fn run_configured(&self) -> Result<GenerationOutcome, GeneratorError> {
        if !self.config.enabled {
            tracing::debug!("Specifier reference generation is disabled");
            return Ok(GenerationOutcome::Disabled);
        }

        let loaded = self.load_collaborators();
        let (registry, corpus) =
            loaded.inspect_err(|e| tracing::error!("Specifier reference generation failed: {e}"))?;
        let mut sink = FsOutput::new(&self.config.output_dir);
        self.run(&registry, &corpus, &mut sink)
    }

    fn load_collaborators(&self) -> Result<(StaticRegistry, Corpus), GeneratorError> {
        let mut registry = StaticRegistry::builtin();
        for path in &self.config.rules {
            registry.load_file(path)?;
        }

        let corpus = match &self.config.corpus {
            Some(path) => Corpus::load(path)?,
            None => Corpus::new(),
        };
        Ok((registry, corpus))
    }

    fn generate(
        &self,
        registry: &dyn RuleRegistry,
        corpus: &dyn DeclarationCorpus,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerationSummary, GeneratorError> {
        tracing::info!("The specifier reference list is being generated.");

        let (catalogs, usages) = self.build_catalogs(registry, corpus)?;
        let export = self.exporter.export(&catalogs, &usages, sink)?;

        tracing::info!("Finished generating the specifier reference list.");
        Ok(GenerationSummary {
            specifiers: catalogs.specifiers.len(),
            metadata: catalogs.metadata.len(),
            usages: usages.len(),
            export,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Tag, TagSet, ValueShape};
    use crate::config::EXPORT_JSON_DEFINE;
    use crate::corpus::{Declaration, Package};
    use crate::export::{CatalogDocument, JSON_ARTIFACT, MemoryOutput};
    use crate::registry::SpecifierRule;

    fn corpus() -> Corpus {
        Corpus::from_packages([Package::new("Game").with_declaration(
            Declaration::new("AHero", Tag::Class)
                .with_meta("ToolTip", "Hello")
                .with_child(Declaration::new("Jump", Tag::Function).with_flag("tooltip")),
        )])
    }

    fn json_config() -> GeneratorConfig {
        GeneratorConfig::default().with_define(EXPORT_JSON_DEFINE, "1")
    }

    #[test]
    fn test_disabled_pass_does_nothing() {
        let config = GeneratorConfig {
            enabled: false,
            ..json_config()
        };
        let mut out = MemoryOutput::new();

        let outcome = Generator::new(config)
            .run(&StaticRegistry::builtin(), &corpus(), &mut out)
            .unwrap();

        assert_eq!(outcome, GenerationOutcome::Disabled);
        assert!(out.is_empty());
    }

    #[test]
    fn test_pass_writes_json_document() {
        let mut out = MemoryOutput::new();
        let outcome = Generator::new(json_config())
            .run(&StaticRegistry::builtin(), &corpus(), &mut out)
            .unwrap();

        let summary = outcome.summary().unwrap();
        assert_eq!(summary.usages, 2);
        assert_eq!(summary.metadata, 1);
        assert_eq!(summary.export.written(), 1);

        let doc = CatalogDocument::from_json(out.get(JSON_ARTIFACT).unwrap()).unwrap();
        let tooltip = &doc.metadata[0];
        assert_eq!(tooltip.name, "ToolTip");
        assert_eq!(tooltip.tags, TagSet::CLASS | TagSet::FUNCTION);
        assert_eq!(tooltip.value_shape, ValueShape::Text);
    }

    #[test]
    fn test_unknown_table_aborts_before_writing() {
        let registry = StaticRegistry::builtin()
            .with_rules([SpecifierRule::new("BrokenSpecifier", "Nowhere", ValueShape::None)]);
        let mut out = MemoryOutput::new();

        let err = Generator::new(json_config())
            .run(&registry, &corpus(), &mut out)
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Registry(RegistryError::UnknownTable { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_parallel_and_sequential_passes_agree() {
        let registry = StaticRegistry::builtin();
        let sequential = Generator::new(json_config())
            .build_catalogs(&registry, &corpus())
            .unwrap()
            .0;
        let parallel = Generator::new(GeneratorConfig {
            parallel: true,
            ..json_config()
        })
        .build_catalogs(&registry, &corpus())
        .unwrap()
        .0;

        assert_eq!(sequential, parallel);
    }
}
