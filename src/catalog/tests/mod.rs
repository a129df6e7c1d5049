#![allow(clippy::unwrap_used, clippy::expect_used)]

mod tests_metadata_catalog;
mod tests_specifier_catalog;
