//! Category table: which declaration tags a rule table applies to.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::TagSet;

/// Names of the rule tables specifiers can extend.
pub mod names {
    pub const CLASS_BASE: &str = "ClassBase";
    pub const CLASS: &str = "Class";
    pub const DEFAULT: &str = "Default";
    pub const ENUM: &str = "Enum";
    pub const FIELD: &str = "Field";
    pub const FUNCTION: &str = "Function";
    pub const INTERFACE: &str = "Interface";
    pub const PROPERTY_ARGUMENT: &str = "PropertyArgument";
    pub const PROPERTY_MEMBER: &str = "PropertyMember";
    pub const SCRIPT_STRUCT: &str = "ScriptStruct";
}

/// Maps a rule table name to the tags whose annotations accept the
/// specifiers registered in that table.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    tables: FxHashMap<SmolStr, TagSet>,
}

impl CategoryTable {
    /// An empty table. Every lookup fails until tables are added.
    pub fn empty() -> Self {
        Self {
            tables: FxHashMap::default(),
        }
    }

    /// The standard rule tables.
    pub fn standard() -> Self {
        Self::empty()
            .with_table(names::CLASS_BASE, TagSet::CLASS | TagSet::INTERFACE)
            .with_table(names::CLASS, TagSet::CLASS)
            .with_table(names::DEFAULT, TagSet::all())
            .with_table(names::ENUM, TagSet::ENUM)
            .with_table(
                names::FIELD,
                TagSet::CLASS
                    | TagSet::ENUM
                    | TagSet::FUNCTION
                    | TagSet::STRUCT
                    | TagSet::DELEGATE
                    | TagSet::INTERFACE,
            )
            .with_table(names::FUNCTION, TagSet::FUNCTION | TagSet::DELEGATE)
            .with_table(names::INTERFACE, TagSet::INTERFACE)
            .with_table(names::PROPERTY_ARGUMENT, TagSet::PARAM)
            .with_table(names::PROPERTY_MEMBER, TagSet::PROPERTY)
            .with_table(names::SCRIPT_STRUCT, TagSet::STRUCT)
    }

    /// Add or replace a table.
    pub fn with_table(mut self, name: impl Into<SmolStr>, tags: TagSet) -> Self {
        self.tables.insert(name.into(), tags);
        self
    }

    /// Tags for a table name. Names are case-sensitive.
    pub fn lookup(&self, name: &str) -> Option<TagSet> {
        self.tables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}
