use crate::base::{Tag, TagSet, ValueShape};
use crate::catalog::{SpecifierCatalog, SpecifierCatalogBuilder};
use crate::registry::{
    CategoryTable, RegistryError, SpecifierDefinition, SpecifierRule, StaticRegistry,
};

fn def(name: &str, tag: Tag, shape: ValueShape) -> SpecifierDefinition {
    SpecifierDefinition::new(name, tag, shape)
}

#[test]
fn test_same_name_across_tables_collapses() {
    let catalog = SpecifierCatalog::build([
        def("BlueprintType", Tag::Class, ValueShape::None),
        def("BlueprintType", Tag::Struct, ValueShape::None),
    ]);

    assert_eq!(catalog.len(), 1);
    let entry = catalog.get("BlueprintType").unwrap();
    assert_eq!(entry.tags, TagSet::CLASS | TagSet::STRUCT);
    assert_eq!(entry.value_shape, ValueShape::None);
}

#[test]
fn test_names_are_case_sensitive() {
    let catalog = SpecifierCatalog::build([
        def("Const", Tag::Class, ValueShape::None),
        def("const", Tag::Param, ValueShape::None),
    ]);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("Const").unwrap().tags, TagSet::CLASS);
    assert_eq!(catalog.get("const").unwrap().tags, TagSet::PARAM);
}

#[test]
fn test_redefinition_with_different_shape_merges() {
    let catalog = SpecifierCatalog::build([
        def("BlueprintGetter", Tag::Function, ValueShape::None),
        def("BlueprintGetter", Tag::Property, ValueShape::Text),
    ]);

    let entry = catalog.get("BlueprintGetter").unwrap();
    assert_eq!(entry.tags, TagSet::FUNCTION | TagSet::PROPERTY);
    assert_eq!(entry.value_shape, ValueShape::Text);
}

#[test]
fn test_output_keeps_first_definition_order() {
    let catalog = SpecifierCatalog::build([
        def("Abstract", Tag::Class, ValueShape::None),
        def("Atomic", Tag::Struct, ValueShape::None),
        def("Abstract", Tag::Interface, ValueShape::None),
        def("Flags", Tag::Enum, ValueShape::None),
    ]);

    let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Abstract", "Atomic", "Flags"]);
}

#[test]
fn test_no_entry_has_empty_tags() {
    let catalog = SpecifierCatalog::from_registry(
        &StaticRegistry::builtin(),
        &CategoryTable::standard(),
    )
    .unwrap();

    assert!(!catalog.is_empty());
    assert!(catalog.iter().all(|entry| !entry.tags.is_empty()));
}

#[test]
fn test_custom_table_without_tags_is_rejected() {
    let table = CategoryTable::standard().with_table("Nothing", TagSet::empty());
    let registry = StaticRegistry::new().with_rules([
        SpecifierRule::new("AbstractSpecifier", "Class", ValueShape::None),
        SpecifierRule::new("GhostSpecifier", "Nothing", ValueShape::None),
    ]);

    let err = SpecifierCatalog::from_registry(&registry, &table).unwrap_err();
    assert!(matches!(err, RegistryError::EmptyTable { .. }));
}

#[test]
fn test_builtin_catalog_merges_shared_names() {
    let catalog = SpecifierCatalog::from_registry(
        &StaticRegistry::builtin(),
        &CategoryTable::standard(),
    )
    .unwrap();

    let blueprint_type = catalog.get("BlueprintType").unwrap();
    assert_eq!(blueprint_type.tags, TagSet::CLASS | TagSet::STRUCT);
    assert_eq!(blueprint_type.value_shape, ValueShape::None);

    let blueprintable = catalog.get("Blueprintable").unwrap();
    assert_eq!(blueprintable.tags, TagSet::CLASS | TagSet::INTERFACE);

    let config = catalog.get("Config").unwrap();
    assert_eq!(config.tags, TagSet::CLASS | TagSet::PROPERTY);
    assert_eq!(config.value_shape, ValueShape::Text);

    assert!(!catalog.contains("Meta"));
}

#[test]
fn test_from_registry_propagates_unknown_table() {
    let registry = StaticRegistry::new().with_rules([
        SpecifierRule::new("AbstractSpecifier", "Class", ValueShape::None),
        SpecifierRule::new("OddSpecifier", "Gizmo", ValueShape::None),
    ]);

    let result = SpecifierCatalog::from_registry(&registry, &CategoryTable::standard());
    assert!(result.is_err());
}

#[test]
fn test_custom_category_table() {
    let table = CategoryTable::empty().with_table("Gizmo", TagSet::DELEGATE | TagSet::FUNCTION);
    let registry = StaticRegistry::new()
        .with_rules([SpecifierRule::new("OddSpecifier", "Gizmo", ValueShape::Text)]);

    let catalog = SpecifierCatalog::from_registry(&registry, &table).unwrap();
    assert_eq!(
        catalog.get("Odd").unwrap().tags,
        TagSet::DELEGATE | TagSet::FUNCTION
    );
}

#[test]
fn test_merged_builders_match_sequential_build() {
    let defs = vec![
        def("Category", Tag::Function, ValueShape::Text),
        def("Const", Tag::Class, ValueShape::None),
        def("Category", Tag::Property, ValueShape::Text),
        def("Const", Tag::Param, ValueShape::None),
    ];

    let mut left = SpecifierCatalogBuilder::new();
    left.extend(defs[..2].iter().cloned());
    let mut right = SpecifierCatalogBuilder::new();
    right.extend(defs[2..].iter().cloned());

    let merged = left.merged(right).finish();
    assert_eq!(merged, SpecifierCatalog::build(defs.clone()));
    assert_eq!(merged, SpecifierCatalog::build_parallel(&defs));
}
