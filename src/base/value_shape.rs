//! Deduced shape of a specifier or metadata value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};

/// What kind of value a specifier or metadata key takes.
///
/// Shapes form a small join-semilattice: `None` and `Bool` both widen to
/// `BoolOrNone`, and everything widens to `Text`. Merging is commutative and
/// associative, so a catalog entry's shape does not depend on the order its
/// occurrences were seen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueShape {
    /// No value is expected; the key's presence is the signal.
    None,
    /// A boolean literal.
    Bool,
    /// Either a boolean literal or no value at all.
    BoolOrNone,
    /// Arbitrary text.
    Text,
}

impl ValueShape {
    /// Classifies a raw annotation value.
    ///
    /// Empty or whitespace-only text is [`ValueShape::None`]; `true` or
    /// `false` in any case (surrounding whitespace ignored) is
    /// [`ValueShape::Bool`]; anything else is [`ValueShape::Text`].
    pub fn classify(raw: &str) -> ValueShape {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            ValueShape::None
        } else if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
            ValueShape::Bool
        } else {
            ValueShape::Text
        }
    }

    /// Least shape that admits both `self` and `other`.
    pub const fn merge(self, other: ValueShape) -> ValueShape {
        use ValueShape::*;

        match (self, other) {
            (Text, _) | (_, Text) => Text,
            (None, None) => None,
            (Bool, Bool) => Bool,
            _ => BoolOrNone,
        }
    }

    /// Name written to catalogs.
    pub const fn name(self) -> &'static str {
        match self {
            ValueShape::None => "None",
            ValueShape::Bool => "Bool",
            ValueShape::BoolOrNone => "BoolOrNone",
            ValueShape::Text => "Text",
        }
    }

    /// Looks a shape up by its name or a legacy alias (`Flag`, `FlagOrBool`,
    /// `String`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<ValueShape> {
        const NAMES: [(&str, ValueShape); 7] = [
            ("None", ValueShape::None),
            ("Bool", ValueShape::Bool),
            ("BoolOrNone", ValueShape::BoolOrNone),
            ("Text", ValueShape::Text),
            ("Flag", ValueShape::None),
            ("FlagOrBool", ValueShape::BoolOrNone),
            ("String", ValueShape::Text),
        ];

        NAMES
            .into_iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, shape)| shape)
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a value type name no shape answers to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value type `{0}`")]
pub struct UnknownValueShape(pub String);

impl FromStr for ValueShape {
    type Err = UnknownValueShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueShape::from_name(s.trim()).ok_or_else(|| UnknownValueShape(s.trim().to_string()))
    }
}

impl<'de> Deserialize<'de> for ValueShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
