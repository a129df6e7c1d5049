//! Specifier rules and the definitions resolved from them.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::error::RegistryError;
use super::table::CategoryTable;
use crate::base::{TagSet, ValueShape};

/// Suffix stripped from handler names when a rule has no explicit name.
pub const HANDLER_SUFFIX: &str = "Specifier";

/// A registered specifier rule, as the rule registry describes it.
///
/// Only rules with both an `extends` table and a declared value shape make
/// it into the catalog; the rest exist for parsing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecifierRule {
    /// Name of the handler implementing the rule, e.g. `AbstractSpecifier`.
    pub handler: SmolStr,

    /// Explicit specifier name, overriding the one derived from `handler`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,

    /// Rule table the specifier is registered in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<SmolStr>,

    /// Shape of the value the specifier accepts.
    #[serde(default, rename = "valueType", skip_serializing_if = "Option::is_none")]
    pub value_shape: Option<ValueShape>,
}

impl SpecifierRule {
    /// A rule for the catalog, named after its handler.
    pub const fn new(handler: &'static str, extends: &'static str, value_shape: ValueShape) -> Self {
        Self {
            handler: SmolStr::new_static(handler),
            name: None,
            extends: Some(SmolStr::new_static(extends)),
            value_shape: Some(value_shape),
        }
    }

    /// A rule that only participates in parsing.
    pub const fn parse_only(handler: &'static str) -> Self {
        Self {
            handler: SmolStr::new_static(handler),
            name: None,
            extends: None,
            value_shape: None,
        }
    }

    /// Overrides the derived name.
    pub fn named(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The specifier name: the explicit name if set, otherwise the handler
    /// name without its [`HANDLER_SUFFIX`].
    pub fn specifier_name(&self) -> SmolStr {
        match &self.name {
            Some(name) => name.clone(),
            None => SmolStr::new(
                self.handler
                    .strip_suffix(HANDLER_SUFFIX)
                    .unwrap_or(self.handler.as_str()),
            ),
        }
    }

    /// Resolves the rule into a catalog definition.
    ///
    /// Returns `Ok(None)` for rules without an `extends` table or a declared
    /// value shape. An `extends` table missing from `table` is an error.
    pub fn resolve(
        &self,
        table: &CategoryTable,
    ) -> Result<Option<SpecifierDefinition>, RegistryError> {
        let (Some(extends), Some(value_shape)) = (&self.extends, self.value_shape) else {
            tracing::trace!(handler = %self.handler, "skipping rule without table or value type");
            return Ok(None);
        };
        if extends.is_empty() {
            return Ok(None);
        }

        let tags = table
            .lookup(extends)
            .ok_or_else(|| RegistryError::unknown_table(self.handler.clone(), extends.clone()))?;
        if tags.is_empty() {
            return Err(RegistryError::empty_table(self.handler.clone(), extends.clone()));
        }

        let name = self.specifier_name();
        if !is_identifier(&name) {
            return Err(RegistryError::invalid_name(self.handler.clone(), name));
        }

        Ok(Some(SpecifierDefinition {
            name,
            tags,
            value_shape,
        }))
    }
}

/// One raw specifier definition: a name valid for a set of tags with a
/// declared value shape. Several definitions may share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierDefinition {
    pub name: SmolStr,
    pub tags: TagSet,
    pub value_shape: ValueShape,
}

impl SpecifierDefinition {
    pub fn new(name: impl Into<SmolStr>, tags: impl Into<TagSet>, value_shape: ValueShape) -> Self {
        Self {
            name: name.into(),
            tags: tags.into(),
            value_shape,
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Tag;

    #[test]
    fn test_name_is_derived_from_handler() {
        let rule = SpecifierRule::new("BlueprintTypeSpecifier", "Class", ValueShape::None);
        assert_eq!(rule.specifier_name(), "BlueprintType");

        let rule = SpecifierRule::new("Abstract", "Class", ValueShape::None);
        assert_eq!(rule.specifier_name(), "Abstract");
    }

    #[test]
    fn test_explicit_name_wins() {
        let rule = SpecifierRule::new("ConfigClassSpecifier", "Class", ValueShape::Text).named("Config");
        assert_eq!(rule.specifier_name(), "Config");
    }

    #[test]
    fn test_resolve_maps_table_to_tags() {
        let table = CategoryTable::standard();
        let rule = SpecifierRule::new("ConstSpecifier", "PropertyArgument", ValueShape::None);

        let def = rule.resolve(&table).unwrap().unwrap();
        assert_eq!(def, SpecifierDefinition::new("Const", Tag::Param, ValueShape::None));
    }

    #[test]
    fn test_resolve_skips_incomplete_rules() {
        let table = CategoryTable::standard();

        assert!(SpecifierRule::parse_only("LegacySpecifier").resolve(&table).unwrap().is_none());

        let mut no_shape = SpecifierRule::new("WithinSpecifier", "Class", ValueShape::Text);
        no_shape.value_shape = None;
        assert!(no_shape.resolve(&table).unwrap().is_none());

        let mut empty_table = SpecifierRule::new("WithinSpecifier", "Class", ValueShape::Text);
        empty_table.extends = Some(SmolStr::default());
        assert!(empty_table.resolve(&table).unwrap().is_none());
    }

    #[test]
    fn test_resolve_rejects_unknown_table() {
        let table = CategoryTable::standard();
        let rule = SpecifierRule::new("WidgetSpecifier", "Widget", ValueShape::None);

        let err = rule.resolve(&table).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnknownTable { ref rule, ref table } if rule == "WidgetSpecifier" && table == "Widget"
        ));
    }

    #[test]
    fn test_resolve_rejects_table_without_tags() {
        let table = CategoryTable::empty().with_table("Nothing", TagSet::empty());
        let rule = SpecifierRule::new("GhostSpecifier", "Nothing", ValueShape::None);

        let err = rule.resolve(&table).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::EmptyTable { ref rule, ref table } if rule == "GhostSpecifier" && table == "Nothing"
        ));
    }

    #[test]
    fn test_resolve_rejects_invalid_names() {
        let table = CategoryTable::standard();

        let bare = SpecifierRule::new("Specifier", "Class", ValueShape::None);
        assert!(matches!(bare.resolve(&table), Err(RegistryError::InvalidName { .. })));

        let spaced = SpecifierRule::new("X", "Class", ValueShape::None).named("Two Words");
        assert!(matches!(spaced.resolve(&table), Err(RegistryError::InvalidName { .. })));
    }

    #[test]
    fn test_rule_json_schema() {
        let json = r#"{"handler":"ReplicatedUsingSpecifier","extends":"PropertyMember","valueType":"Text"}"#;
        let rule: SpecifierRule = serde_json::from_str(json).unwrap();

        assert_eq!(rule.specifier_name(), "ReplicatedUsing");
        assert_eq!(rule.extends.as_deref(), Some("PropertyMember"));
        assert_eq!(rule.value_shape, Some(ValueShape::Text));
    }
}
