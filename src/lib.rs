//! projgen - IDE project generation from an extracted build graph
//!
//! This crate decodes the build graph handed over by the extractor, derives
//! the "Products" group of the generated project, and orders everything it
//! emits deterministically.

pub mod core;
pub mod document;
pub mod ops;
pub mod ordering;
pub mod util;

/// Test fixtures for projgen unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{FilePath, Inputs, Product, ProductType, Project, Target, TargetId};
pub use document::{create_products, Group, Node, Products};
pub use ordering::natural_cmp;
