//! Declaration categories and the bitmask set over them.
//!
//! A [`Tag`] names one kind of annotated declaration. A [`TagSet`] is the
//! union of the categories where a specifier is valid or a metadata key
//! was observed.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// One kind of annotated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tag {
    /// Member variables.
    Property,
    /// Class-like types.
    Class,
    /// Plain structs.
    Struct,
    /// Enumerations.
    Enum,
    /// Enumerator values.
    Meta,
    /// Function parameters.
    Param,
    /// Interfaces.
    Interface,
    /// Delegate signatures.
    Delegate,
    /// Functions and methods.
    Function,
}

impl Tag {
    /// Every tag, in bit order.
    pub const ALL: [Tag; 9] = [
        Tag::Property,
        Tag::Class,
        Tag::Struct,
        Tag::Enum,
        Tag::Meta,
        Tag::Param,
        Tag::Interface,
        Tag::Delegate,
        Tag::Function,
    ];

    /// Returns the single-bit set for this tag.
    pub const fn as_set(self) -> TagSet {
        match self {
            Tag::Property => TagSet::PROPERTY,
            Tag::Class => TagSet::CLASS,
            Tag::Struct => TagSet::STRUCT,
            Tag::Enum => TagSet::ENUM,
            Tag::Meta => TagSet::META,
            Tag::Param => TagSet::PARAM,
            Tag::Interface => TagSet::INTERFACE,
            Tag::Delegate => TagSet::DELEGATE,
            Tag::Function => TagSet::FUNCTION,
        }
    }

    /// Display name, as written in catalogs and corpus files.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Property => "Property",
            Tag::Class => "Class",
            Tag::Struct => "Struct",
            Tag::Enum => "Enum",
            Tag::Meta => "Meta",
            Tag::Param => "Param",
            Tag::Interface => "Interface",
            Tag::Delegate => "Delegate",
            Tag::Function => "Function",
        }
    }

    /// Looks a tag up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::from_name(s.trim()).ok_or_else(|| UnknownTag(s.trim().to_string()))
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

bitflags::bitflags! {
    /// A set of declaration categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TagSet: u32 {
        const PROPERTY = 1 << 0;
        const CLASS = 1 << 1;
        const STRUCT = 1 << 2;
        const ENUM = 1 << 3;
        const META = 1 << 4;
        const PARAM = 1 << 5;
        const INTERFACE = 1 << 6;
        const DELEGATE = 1 << 7;
        const FUNCTION = 1 << 8;
    }
}

impl TagSet {
    /// Union of two sets.
    #[inline]
    pub const fn union_with(self, other: TagSet) -> TagSet {
        self.union(other)
    }

    /// Whether `tag` is a member of this set.
    #[inline]
    pub const fn has(self, tag: Tag) -> bool {
        self.contains(tag.as_set())
    }

    /// Member tags in bit order.
    pub fn tags(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.has(*tag))
    }
}

impl From<Tag> for TagSet {
    fn from(tag: Tag) -> Self {
        tag.as_set()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TagSet::empty(), |set, tag| set | tag.as_set())
    }
}

/// `"Class, Struct"`; the empty set renders as `"0"`.
impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }
        for (i, tag) in self.tags().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.name())?;
        }
        Ok(())
    }
}

/// Error returned when a tag set's textual form names an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown declaration tag `{0}`")]
pub struct UnknownTag(pub String);

impl FromStr for TagSet {
    type Err = UnknownTag;

    /// Accepts comma or `|` separated names in any case, or a decimal bitmask.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(bits) = trimmed.parse::<u32>() {
            return TagSet::from_bits(bits).ok_or_else(|| UnknownTag(trimmed.to_string()));
        }

        trimmed
            .split([',', '|'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Tag::from_name(part).ok_or_else(|| UnknownTag(part.to_string())))
            .collect()
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagSetVisitor;

        impl Visitor<'_> for TagSetVisitor {
            type Value = TagSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of tag names or a numeric bitmask")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TagSet, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TagSet, E> {
                u32::try_from(v)
                    .ok()
                    .and_then(TagSet::from_bits)
                    .ok_or_else(|| E::custom(UnknownTag(v.to_string())))
            }
        }

        deserializer.deserialize_any(TagSetVisitor)
    }
}
