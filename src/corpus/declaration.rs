//! Declarations and packages of the corpus.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::Tag;

/// An annotated declaration with its metadata and nested declarations.
///
/// Nesting mirrors the source: properties and functions live inside their
/// class, parameters inside their function, enumerators inside their enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: SmolStr,
    pub kind: Tag,
    /// Metadata key/value pairs, in annotation order. Flags have an empty value.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<SmolStr, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Declaration>,
}

impl Declaration {
    pub fn new(name: impl Into<SmolStr>, kind: Tag) -> Self {
        Self {
            name: name.into(),
            kind,
            metadata: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Attach a metadata pair.
    pub fn with_meta(mut self, key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach a valueless metadata flag.
    pub fn with_flag(self, key: impl Into<SmolStr>) -> Self {
        self.with_meta(key, String::new())
    }

    pub fn with_child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }

    /// This declaration followed by all of its descendants, depth first.
    pub fn walk(&self) -> impl Iterator<Item = &Declaration> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// A named group of top-level declarations, usually one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: SmolStr,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl Package {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Every declaration in the package, depth first.
    pub fn walk(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().flat_map(Declaration::walk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_is_depth_first_in_source_order() {
        let class = Declaration::new("AActor", Tag::Class)
            .with_child(
                Declaration::new("Tick", Tag::Function)
                    .with_child(Declaration::new("DeltaSeconds", Tag::Param)),
            )
            .with_child(Declaration::new("Health", Tag::Property));

        let names: Vec<_> = class.walk().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["AActor", "Tick", "DeltaSeconds", "Health"]);
    }

    #[test]
    fn test_declaration_json() {
        let json = r#"{
            "name": "EColor",
            "kind": "enum",
            "metadata": { "BlueprintType": "" },
            "children": [ { "name": "Red", "kind": "Meta", "metadata": { "DisplayName": "Red" } } ]
        }"#;

        let decl: Declaration = serde_json::from_str(json).unwrap();
        assert_eq!(decl.kind, Tag::Enum);
        assert_eq!(decl.metadata.get("BlueprintType").map(String::as_str), Some(""));
        assert_eq!(decl.children[0].kind, Tag::Meta);
    }
}
