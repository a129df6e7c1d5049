//! Declaration corpus and metadata usage scanning.
//!
//! The corpus is the set of annotated declarations the generator reads
//! metadata from. It is obtained elsewhere (a header tool, a JSON dump)
//! and handed over already parsed; this module only holds and walks it.

mod declaration;
mod error;
pub mod load;
mod scanner;

use std::path::Path;

pub use declaration::{Declaration, Package};
pub use error::CorpusError;
pub use scanner::{MetadataUsage, MetadataUsageScanner};

/// Provider of the loaded declarations.
pub trait DeclarationCorpus {
    fn packages(&self) -> &[Package];
}

/// In-memory corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    packages: Vec<Package>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            packages: packages.into_iter().collect(),
        }
    }

    /// Loads a corpus file or directory. See [`load::load_path`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        load::load_path(path.as_ref()).map(Self::from_packages)
    }

    pub fn add_package(&mut self, package: Package) {
        self.packages.push(package);
    }
}

impl DeclarationCorpus for Corpus {
    fn packages(&self) -> &[Package] {
        &self.packages
    }
}

impl DeclarationCorpus for [Package] {
    fn packages(&self) -> &[Package] {
        self
    }
}

impl DeclarationCorpus for Vec<Package> {
    fn packages(&self) -> &[Package] {
        self
    }
}
