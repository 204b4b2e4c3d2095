//! Project spec checking.

use std::path::Path;

use tracing::debug;

use crate::core::{validate, DuplicatePathPolicy, Project};
use crate::util::diagnostic::{summarize, Diagnostic, Severity};
use crate::util::Config;

/// Result of checking a project spec.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Diagnostics in the order the issues were found
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Check if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// One-line summary, e.g. `1 error, 2 warnings`.
    pub fn summary(&self) -> String {
        summarize(&self.diagnostics)
    }
}

/// Validate `project` and turn each issue into a diagnostic located at `spec_path`.
pub fn check(project: &Project, spec_path: &Path, config: &Config) -> CheckReport {
    let policy: DuplicatePathPolicy = config.duplicate_paths();
    let issues = validate(project);
    debug!(issues = issues.len(), ?policy, "validated project spec");

    let diagnostics = issues
        .iter()
        .map(|issue| issue.to_diagnostic(policy).with_location(spec_path))
        .collect();

    CheckReport { diagnostics }
}
