//! Foundation types shared by both catalogs.
//!
//! - [`Tag`], [`TagSet`] - declaration categories and their bitmask union
//! - [`ValueShape`] - classification and merge of annotation values
//!
//! This module has NO dependencies on other specref modules.

mod tag;
mod value_shape;

pub use tag::{Tag, TagSet, UnknownTag};
pub use value_shape::{UnknownValueShape, ValueShape};
