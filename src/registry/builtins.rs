//! Built-in specifier rules.
//!
//! One entry per registered handler. A specifier accepted in several
//! tables appears once per table; the catalog builder folds them.

use super::rule::SpecifierRule;
use super::table::names::*;
use crate::base::ValueShape::{self, None as Flag, Text};

const fn rule(handler: &'static str, extends: &'static str, shape: ValueShape) -> SpecifierRule {
    SpecifierRule::new(handler, extends, shape)
}

/// Every built-in rule, in registration order.
pub fn builtin_rules() -> Vec<SpecifierRule> {
    let mut rules = Vec::with_capacity(160);
    rules.extend(class_rules());
    rules.extend(interface_rules());
    rules.extend(struct_rules());
    rules.extend(enum_rules());
    rules.extend(function_rules());
    rules.extend(property_rules());
    rules.extend(param_rules());
    rules.extend(parse_only_rules());
    rules
}

fn class_rules() -> Vec<SpecifierRule> {
    vec![
        rule("MinimalAPISpecifier", CLASS_BASE, Flag),
        rule("BlueprintableSpecifier", CLASS_BASE, Flag),
        rule("NotBlueprintableSpecifier", CLASS_BASE, Flag),
        rule("ConversionRootSpecifier", CLASS_BASE, Flag),
        rule("NoExportSpecifier", CLASS, Flag),
        rule("IntrinsicSpecifier", CLASS, Flag),
        rule("ComponentWrapperClassSpecifier", CLASS, Flag),
        rule("WithinSpecifier", CLASS, Text),
        rule("EditInlineNewSpecifier", CLASS, Flag),
        rule("NotEditInlineNewSpecifier", CLASS, Flag),
        rule("NotPlaceableSpecifier", CLASS, Flag),
        rule("DefaultToInstancedSpecifier", CLASS, Flag),
        rule("HideDropdownSpecifier", CLASS, Flag),
        rule("HiddenSpecifier", CLASS, Flag),
        rule("DependsOnSpecifier", CLASS, Text),
        rule("AbstractSpecifier", CLASS, Flag),
        rule("DeprecatedSpecifier", CLASS, Flag),
        rule("TransientSpecifier", CLASS, Flag),
        rule("NonTransientSpecifier", CLASS, Flag),
        rule("OptionalSpecifier", CLASS, Flag),
        rule("CustomConstructorSpecifier", CLASS, Flag),
        rule("ConfigClassSpecifier", CLASS, Text).named("Config"),
        rule("DefaultConfigSpecifier", CLASS, Flag),
        rule("GlobalUserConfigSpecifier", CLASS, Flag),
        rule("ProjectUserConfigSpecifier", CLASS, Flag),
        rule("PerPlatformConfigSpecifier", CLASS, Flag),
        rule("ShowCategoriesSpecifier", CLASS, Text),
        rule("HideCategoriesSpecifier", CLASS, Text),
        rule("ShowFunctionsSpecifier", CLASS, Text),
        rule("HideFunctionsSpecifier", CLASS, Text),
        rule("ClassGroupSpecifier", CLASS, Text),
        rule("AutoExpandCategoriesSpecifier", CLASS, Text),
        rule("AutoCollapseCategoriesSpecifier", CLASS, Text),
        rule("DontAutoCollapseCategoriesSpecifier", CLASS, Text),
        rule("CollapseCategoriesSpecifier", CLASS, Flag),
        rule("DontCollapseCategoriesSpecifier", CLASS, Flag),
        rule("PrioritizeCategoriesSpecifier", CLASS, Text),
        rule("AdvancedClassDisplaySpecifier", CLASS, Flag),
        rule("ConstClassSpecifier", CLASS, Flag).named("Const"),
        rule("PlaceableSpecifier", CLASS, Flag),
        rule("BlueprintTypeClassSpecifier", CLASS, Flag).named("BlueprintType"),
        rule("NotBlueprintTypeClassSpecifier", CLASS, Flag).named("NotBlueprintType"),
        rule("SparseClassDataTypesSpecifier", CLASS, Text),
        rule("CustomFieldNotifySpecifier", CLASS, Flag),
    ]
}

fn interface_rules() -> Vec<SpecifierRule> {
    vec![rule("DependsOnInterfaceSpecifier", INTERFACE, Text).named("DependsOn")]
}

fn struct_rules() -> Vec<SpecifierRule> {
    vec![
        rule("NoExportStructSpecifier", SCRIPT_STRUCT, Flag).named("NoExport"),
        rule("AtomicSpecifier", SCRIPT_STRUCT, Flag),
        rule("ImmutableSpecifier", SCRIPT_STRUCT, Flag),
        rule("HasDefaultsSpecifier", SCRIPT_STRUCT, Flag),
        rule("HasNoOpConstructorSpecifier", SCRIPT_STRUCT, Flag),
        rule("IsAlwaysAccessibleSpecifier", SCRIPT_STRUCT, Flag),
        rule("IsCoreTypeSpecifier", SCRIPT_STRUCT, Flag),
        rule("BlueprintTypeStructSpecifier", SCRIPT_STRUCT, Flag).named("BlueprintType"),
    ]
}

fn enum_rules() -> Vec<SpecifierRule> {
    vec![rule("FlagsSpecifier", ENUM, Flag)]
}

fn function_rules() -> Vec<SpecifierRule> {
    vec![
        rule("BlueprintImplementableEventSpecifier", FUNCTION, Flag),
        rule("BlueprintNativeEventSpecifier", FUNCTION, Flag),
        rule("SealedEventSpecifier", FUNCTION, Flag),
        rule("ExecSpecifier", FUNCTION, Flag),
        rule("ServerSpecifier", FUNCTION, Text),
        rule("ClientSpecifier", FUNCTION, Text),
        rule("NetMulticastSpecifier", FUNCTION, Flag),
        rule("ServiceRequestSpecifier", FUNCTION, Text),
        rule("ServiceResponseSpecifier", FUNCTION, Text),
        rule("ReliableSpecifier", FUNCTION, Flag),
        rule("UnreliableSpecifier", FUNCTION, Flag),
        rule("CustomThunkSpecifier", FUNCTION, Flag),
        rule("BlueprintCallableFunctionSpecifier", FUNCTION, Flag).named("BlueprintCallable"),
        rule("BlueprintGetterFunctionSpecifier", FUNCTION, Flag).named("BlueprintGetter"),
        rule("BlueprintSetterFunctionSpecifier", FUNCTION, Flag).named("BlueprintSetter"),
        rule("BlueprintPureSpecifier", FUNCTION, Flag),
        rule("CallInEditorSpecifier", FUNCTION, Flag),
        rule("BlueprintAuthorityOnlyFunctionSpecifier", FUNCTION, Flag)
            .named("BlueprintAuthorityOnly"),
        rule("BlueprintCosmeticSpecifier", FUNCTION, Flag),
        rule("WithValidationSpecifier", FUNCTION, Flag),
        rule("FieldNotifySpecifier", FUNCTION, Flag),
        rule("CategoryFunctionSpecifier", FUNCTION, Text).named("Category"),
    ]
}

fn property_rules() -> Vec<SpecifierRule> {
    vec![
        rule("EditAnywhereSpecifier", PROPERTY_MEMBER, Flag),
        rule("EditInstanceOnlySpecifier", PROPERTY_MEMBER, Flag),
        rule("EditDefaultsOnlySpecifier", PROPERTY_MEMBER, Flag),
        rule("VisibleAnywhereSpecifier", PROPERTY_MEMBER, Flag),
        rule("VisibleInstanceOnlySpecifier", PROPERTY_MEMBER, Flag),
        rule("VisibleDefaultsOnlySpecifier", PROPERTY_MEMBER, Flag),
        rule("BlueprintReadWriteSpecifier", PROPERTY_MEMBER, Flag),
        rule("BlueprintReadOnlySpecifier", PROPERTY_MEMBER, Flag),
        rule("BlueprintSetterPropertySpecifier", PROPERTY_MEMBER, Text).named("BlueprintSetter"),
        rule("BlueprintGetterPropertySpecifier", PROPERTY_MEMBER, Text).named("BlueprintGetter"),
        rule("ConfigPropertySpecifier", PROPERTY_MEMBER, Flag).named("Config"),
        rule("GlobalConfigSpecifier", PROPERTY_MEMBER, Flag),
        rule("LocalizedSpecifier", PROPERTY_MEMBER, Flag),
        rule("TransientPropertySpecifier", PROPERTY_MEMBER, Flag).named("Transient"),
        rule("DuplicateTransientSpecifier", PROPERTY_MEMBER, Flag),
        rule("TextExportTransientSpecifier", PROPERTY_MEMBER, Flag),
        rule("NonPIETransientSpecifier", PROPERTY_MEMBER, Flag),
        rule("NonPIEDuplicateTransientSpecifier", PROPERTY_MEMBER, Flag),
        rule("ExportSpecifier", PROPERTY_MEMBER, Flag),
        rule("NoClearSpecifier", PROPERTY_MEMBER, Flag),
        rule("EditFixedSizeSpecifier", PROPERTY_MEMBER, Flag),
        rule("ReplicatedSpecifier", PROPERTY_MEMBER, Flag),
        rule("ReplicatedUsingSpecifier", PROPERTY_MEMBER, Text),
        rule("NotReplicatedPropertySpecifier", PROPERTY_MEMBER, Flag).named("NotReplicated"),
        rule("RepRetrySpecifier", PROPERTY_MEMBER, Flag),
        rule("InterpSpecifier", PROPERTY_MEMBER, Flag),
        rule("NonTransactionalSpecifier", PROPERTY_MEMBER, Flag),
        rule("InstancedSpecifier", PROPERTY_MEMBER, Flag),
        rule("BlueprintAssignableSpecifier", PROPERTY_MEMBER, Flag),
        rule("CategoryPropertySpecifier", PROPERTY_MEMBER, Text).named("Category"),
        rule("SimpleDisplaySpecifier", PROPERTY_MEMBER, Flag),
        rule("AdvancedDisplaySpecifier", PROPERTY_MEMBER, Flag),
        rule("EditHideSpecifier", PROPERTY_MEMBER, Flag),
        rule("EditInlineSpecifier", PROPERTY_MEMBER, Flag),
        rule("EditFixedHideSpecifier", PROPERTY_MEMBER, Flag),
        rule("AssetRegistrySearchableSpecifier", PROPERTY_MEMBER, Flag),
        rule("SaveGameSpecifier", PROPERTY_MEMBER, Flag),
        rule("BlueprintCallablePropertySpecifier", PROPERTY_MEMBER, Flag).named("BlueprintCallable"),
        rule("BlueprintAuthorityOnlyPropertySpecifier", PROPERTY_MEMBER, Flag)
            .named("BlueprintAuthorityOnly"),
        rule("SkipSerializationSpecifier", PROPERTY_MEMBER, Flag),
        rule("FieldNotifyPropertySpecifier", PROPERTY_MEMBER, Flag).named("FieldNotify"),
        rule("SetterSpecifier", PROPERTY_MEMBER, Text),
        rule("GetterSpecifier", PROPERTY_MEMBER, Text),
    ]
}

fn param_rules() -> Vec<SpecifierRule> {
    vec![
        rule("ConstParamSpecifier", PROPERTY_ARGUMENT, Flag).named("Const"),
        rule("RefSpecifier", PROPERTY_ARGUMENT, Flag),
        rule("NotReplicatedParamSpecifier", PROPERTY_ARGUMENT, Flag).named("NotReplicated"),
    ]
}

/// Handlers the parser knows about that are never listed in the catalog.
fn parse_only_rules() -> Vec<SpecifierRule> {
    vec![
        SpecifierRule::parse_only("MetaSpecifier"),
        SpecifierRule::parse_only("UMetaSpecifier"),
        SpecifierRule::parse_only("EditorConfigSpecifier"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CategoryTable;

    #[test]
    fn test_every_builtin_resolves() {
        let table = CategoryTable::standard();
        for rule in builtin_rules() {
            assert!(rule.resolve(&table).is_ok(), "rule {} failed", rule.handler);
        }
    }

    #[test]
    fn test_parse_only_rules_are_skipped() {
        let table = CategoryTable::standard();
        let skipped = builtin_rules()
            .into_iter()
            .filter(|rule| rule.resolve(&table).unwrap().is_none())
            .count();
        assert_eq!(skipped, parse_only_rules().len());
    }
}
