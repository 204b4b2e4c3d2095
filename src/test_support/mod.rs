//! Test utilities for projgen unit tests.
//!
//! Fixtures build targets and projects in memory, or write a project spec
//! to a temporary directory for the loader to read back.

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
