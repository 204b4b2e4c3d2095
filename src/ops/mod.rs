//! High-level operations.
//!
//! This module contains the implementation of projgen commands.

pub mod check;
pub mod load;
pub mod report;

pub use check::{check, CheckReport};
pub use load::{decode_project, load_project, LoadError};
pub use report::{render_inputs, render_tree, ProductEntry, ProductsReport};
