//! Cross-target consistency checks.
//!
//! Assembly assumes every referenced target exists and tolerates duplicate
//! product paths. This module finds the places where a decoded project breaks
//! those assumptions so the caller can reject or warn before assembling.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ProductType, Project, TargetId};
use crate::ordering::natural_cmp;
use crate::util::diagnostic::{suggestions, Diagnostic, Severity};

/// How duplicate product paths are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePathPolicy {
    /// Report as a warning; the last target in ID order keeps the path
    #[default]
    Warn,
    /// Report as an error
    Error,
}

/// A consistency problem in a decoded project.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("target `{target}` depends on unknown target `{dependency}`")]
    UnknownDependency {
        target: TargetId,
        dependency: TargetId,
    },

    #[error("target `{target}` has unknown test host `{host}`")]
    UnknownTestHost { target: TargetId, host: TargetId },

    #[error("potential merge of `{from}` into `{into}` names unknown target `{missing}`")]
    UnknownMergeCandidate {
        from: TargetId,
        into: TargetId,
        missing: TargetId,
    },

    #[error("target `{target}` has a test host but builds a {product_type}")]
    TestHostOnNonTest {
        target: TargetId,
        product_type: ProductType,
    },

    #[error("product path `{}` is declared by {} targets", .path.display(), .targets.len())]
    DuplicateProductPath {
        path: PathBuf,
        /// Owners in target ID order; the last one is indexed under `path`
        targets: Vec<TargetId>,
    },
}

impl ValidationIssue {
    /// Severity of this issue under the given duplicate-path policy.
    pub fn severity(&self, policy: DuplicatePathPolicy) -> Severity {
        match self {
            ValidationIssue::UnknownDependency { .. }
            | ValidationIssue::UnknownTestHost { .. }
            | ValidationIssue::UnknownMergeCandidate { .. } => Severity::Error,
            ValidationIssue::TestHostOnNonTest { .. } => Severity::Warning,
            ValidationIssue::DuplicateProductPath { .. } => match policy {
                DuplicatePathPolicy::Warn => Severity::Warning,
                DuplicatePathPolicy::Error => Severity::Error,
            },
        }
    }

    /// Convert to a user-facing diagnostic.
    pub fn to_diagnostic(&self, policy: DuplicatePathPolicy) -> Diagnostic {
        let diag = Diagnostic::new(self.severity(policy), self.to_string());

        match self {
            ValidationIssue::UnknownDependency { .. } => diag
                .with_context("declared in `dependencies`")
                .with_suggestion(suggestions::REGENERATE),

            ValidationIssue::UnknownTestHost { .. } => diag
                .with_context("declared in `testHost`")
                .with_suggestion(suggestions::REGENERATE)
                .with_suggestion(suggestions::LIST_TARGETS),

            ValidationIssue::UnknownMergeCandidate { .. } => diag
                .with_context("declared in `potentialTargetMerges`")
                .with_suggestion(suggestions::REGENERATE),

            ValidationIssue::TestHostOnNonTest { .. } => {
                diag.with_context("only test bundles run inside a host")
            }

            ValidationIssue::DuplicateProductPath { path, targets } => {
                let owner = targets.last().map(|t| t.to_string()).unwrap_or_default();
                let mut diag = diag;
                for target in display_order(targets) {
                    diag = diag.with_context(format!("declared by `{}`", target));
                }
                diag = diag
                    .with_context(format!(
                        "`{}` is indexed under `{}`",
                        owner,
                        path.display()
                    ))
                    .with_suggestion(suggestions::UNIQUE_PRODUCT_PATHS);
                if policy == DuplicatePathPolicy::Error {
                    diag = diag.with_suggestion(suggestions::DUPLICATE_POLICY);
                }
                diag
            }
        }
    }
}

/// Check a project for dangling references and ambiguous products.
///
/// Issues come back grouped by kind, each group in target ID order.
pub fn validate(project: &Project) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let known = |id: &TargetId| project.targets.contains_key(id);

    for (id, target) in &project.targets {
        for dependency in target.dependencies.iter().filter(|d| !known(d)) {
            issues.push(ValidationIssue::UnknownDependency {
                target: id.clone(),
                dependency: dependency.clone(),
            });
        }
    }

    for (id, target) in &project.targets {
        let Some(host) = &target.test_host else {
            continue;
        };
        if !known(host) {
            issues.push(ValidationIssue::UnknownTestHost {
                target: id.clone(),
                host: host.clone(),
            });
        }
        if !target.is_test() {
            issues.push(ValidationIssue::TestHostOnNonTest {
                target: id.clone(),
                product_type: target.product.product_type,
            });
        }
    }

    for (from, dests) in &project.potential_target_merges {
        for into in dests {
            for missing in [from, into].into_iter().filter(|id| !known(id)) {
                issues.push(ValidationIssue::UnknownMergeCandidate {
                    from: from.clone(),
                    into: into.clone(),
                    missing: missing.clone(),
                });
            }
        }
    }

    let mut by_path: BTreeMap<&PathBuf, Vec<TargetId>> = BTreeMap::new();
    for (id, target) in &project.targets {
        if let Some(path) = &target.product.path {
            by_path.entry(path).or_default().push(id.clone());
        }
    }
    for (path, mut targets) in by_path {
        if targets.len() > 1 {
            // Assembly order: the last entry owns the path.
            targets.sort();
            issues.push(ValidationIssue::DuplicateProductPath {
                path: path.clone(),
                targets,
            });
        }
    }

    issues
}

/// Target IDs in natural order, for display.
fn display_order(ids: &[TargetId]) -> Vec<&TargetId> {
    let mut ids: Vec<&TargetId> = ids.iter().collect();
    ids.sort_by(|a, b| natural_cmp(a.as_str(), b.as_str()));
    ids
}
