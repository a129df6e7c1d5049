//! The structured catalog document read by the viewer.
//!
//! ```json
//! {
//!   "specifiers": [ { "specifierName": "BlueprintType", "tag": "Class, Struct", "valueType": "None" } ],
//!   "metadata":   [ { "metadataName": "ToolTip", "tag": "Property, Function", "valueType": "Text" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::error::ExportError;
use crate::catalog::{Catalogs, MetadataEntry, SpecifierEntry};

/// Both catalogs as flat lists, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub specifiers: Vec<SpecifierEntry>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

impl CatalogDocument {
    pub fn from_catalogs(catalogs: &Catalogs) -> Self {
        Self {
            specifiers: catalogs.specifiers.iter().cloned().collect(),
            metadata: catalogs.metadata.iter().cloned().collect(),
        }
    }

    /// Pretty-printed JSON text.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(text)?)
    }
}
