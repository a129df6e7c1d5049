use crate::base::{Tag, TagSet, ValueShape};
use crate::catalog::{MetadataCatalog, MetadataCatalogBuilder, fold_key};
use crate::corpus::MetadataUsage;
use rstest::rstest;

fn usage(key: &str, value: &str, tag: Tag) -> MetadataUsage {
    MetadataUsage::new(key, value, tag)
}

#[test]
fn test_keys_collapse_ignoring_case() {
    let catalog = MetadataCatalog::build([
        usage("Category", "Combat", Tag::Property),
        usage("category", "Movement", Tag::Function),
    ]);

    assert_eq!(catalog.len(), 1);
    let entry = catalog.get("CATEGORY").unwrap();
    assert_eq!(entry.name, "Category");
    assert_eq!(entry.tags, TagSet::PROPERTY | TagSet::FUNCTION);
}

#[test]
fn test_first_seen_casing_is_kept() {
    let catalog = MetadataCatalog::build([
        usage("ToolTip", "Hello", Tag::Property),
        usage("tooltip", "", Tag::Function),
    ]);

    let entry = catalog.get("tooltip").unwrap();
    assert_eq!(entry.name, "ToolTip");
    assert_eq!(entry.tags, TagSet::PROPERTY | TagSet::FUNCTION);
    assert_eq!(entry.value_shape, ValueShape::Text);
}

#[test]
fn test_bool_and_flag_widen_to_bool_or_none() {
    let catalog = MetadataCatalog::build([
        usage("AllowPrivateAccess", "true", Tag::Property),
        usage("AllowPrivateAccess", "", Tag::Property),
        usage("AllowPrivateAccess", "false", Tag::Property),
    ]);

    let entry = catalog.get("AllowPrivateAccess").unwrap();
    assert_eq!(entry.value_shape, ValueShape::BoolOrNone);
    assert_eq!(entry.tags, TagSet::PROPERTY);
}

#[test]
fn test_single_shapes_are_preserved() {
    let catalog = MetadataCatalog::build([
        usage("Hidden", "", Tag::Meta),
        usage("Hidden", "  ", Tag::Meta),
        usage("ExposeOnSpawn", "True", Tag::Property),
        usage("ExposeOnSpawn", "false", Tag::Property),
    ]);

    assert_eq!(catalog.get("Hidden").unwrap().value_shape, ValueShape::None);
    assert_eq!(catalog.get("ExposeOnSpawn").unwrap().value_shape, ValueShape::Bool);
}

#[test]
fn test_text_is_never_narrowed() {
    let mut builder = MetadataCatalogBuilder::new();
    builder.add_raw("ClampMin", "0.0", Tag::Property);
    builder.add_raw("ClampMin", "", Tag::Property);
    builder.add_raw("ClampMin", "true", Tag::Param);

    let catalog = builder.finish();
    let entry = catalog.get("ClampMin").unwrap();
    assert_eq!(entry.value_shape, ValueShape::Text);
    assert_eq!(entry.tags, TagSet::PROPERTY | TagSet::PARAM);
}

#[test]
fn test_keys_are_folded() {
    let catalog = MetadataCatalog::build([
        usage("DisplayName", "Red", Tag::Meta),
        usage("BlueprintInternalUseOnly", "true", Tag::Function),
    ]);

    let keys: Vec<_> = catalog.keys().collect();
    assert_eq!(keys, ["displayname", "blueprintinternaluseonly"]);
    assert_eq!(fold_key("DisplayName"), "displayname");
}

#[test]
fn test_empty_input_builds_empty_catalog() {
    let catalog = MetadataCatalog::build(Vec::new());
    assert!(catalog.is_empty());
    assert!(catalog.get("anything").is_none());
}

#[test]
fn test_parallel_build_keeps_first_seen_casing() {
    let mut usages = Vec::new();
    for i in 0..2_000 {
        let key = if i == 0 { "ToolTip" } else { "TOOLTIP" };
        usages.push(usage(key, "text", Tag::ALL[i % Tag::ALL.len()]));
        usages.push(usage(&format!("Key{}", i % 37), "", Tag::Class));
    }

    let sequential = MetadataCatalog::build(usages.clone());
    let parallel = MetadataCatalog::build_parallel(&usages);

    assert_eq!(parallel, sequential);
    assert_eq!(parallel.get("tooltip").unwrap().name, "ToolTip");
    assert_eq!(parallel.get("tooltip").unwrap().tags, TagSet::all());
    let order: Vec<_> = parallel.keys().collect();
    let expected: Vec<_> = sequential.keys().collect();
    assert_eq!(order, expected);
}

#[rstest]
#[case(&["", ""], ValueShape::None)]
#[case(&["true", "FALSE"], ValueShape::Bool)]
#[case(&["", "true"], ValueShape::BoolOrNone)]
#[case(&["false", " "], ValueShape::BoolOrNone)]
#[case(&["", "Combat"], ValueShape::Text)]
#[case(&["true", "Combat", ""], ValueShape::Text)]
fn test_observed_values_fold_to_shape(#[case] values: &[&str], #[case] expected: ValueShape) {
    let catalog = MetadataCatalog::build(
        values
            .iter()
            .map(|value| usage("Category", value, Tag::Property)),
    );
    assert_eq!(catalog.get("category").unwrap().value_shape, expected);
}

#[test]
fn test_keys_fold_per_character() {
    let catalog = MetadataCatalog::build([
        usage("ΑΣ", "", Tag::Class),
        usage("ασ", "", Tag::Struct),
    ]);

    assert_eq!(catalog.len(), 1);
    let entry = catalog.get("Ασ").unwrap();
    assert_eq!(entry.name, "ΑΣ");
    assert_eq!(entry.tags, TagSet::CLASS | TagSet::STRUCT);
    assert_eq!(fold_key("ΑΣ"), "ασ");
}

#[test]
fn test_builder_extends_from_borrowed_usages() {
    let usages = [
        usage("ToolTip", "Hello", Tag::Class),
        usage("tooltip", "", Tag::Function),
    ];

    let mut builder = MetadataCatalogBuilder::new();
    builder.extend(&usages);

    assert_eq!(builder.finish(), MetadataCatalog::build(usages.clone()));
}
