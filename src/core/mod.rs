//! Core data structures for projgen.
//!
//! This module contains the decoded build graph:
//! - Identifiers and file paths (TargetId, FilePath)
//! - Targets with their products, platforms and inputs
//! - The project as a whole, plus its validation

pub mod build_setting;
pub mod file_path;
pub mod inputs;
pub mod platform;
pub mod product;
pub mod project;
pub mod target;
pub mod target_id;
pub mod validate;

pub use build_setting::BuildSetting;
pub use file_path::{FilePath, FilePathKind};
pub use inputs::Inputs;
pub use platform::{Os, Platform};
pub use product::{Product, ProductType};
pub use project::Project;
pub use target::{SearchPaths, Target};
pub use target_id::TargetId;
pub use validate::{validate, DuplicatePathPolicy, ValidationIssue};
