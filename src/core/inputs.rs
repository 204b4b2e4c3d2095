//! Per-target file inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::FilePath;

/// The files a target compiles, exposes, or bundles.
///
/// Categories are expected to be disjoint, but nothing breaks if they
/// overlap. Any category missing from the input decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    /// Sources compiled with ARC
    pub srcs: BTreeSet<FilePath>,

    /// Sources compiled without ARC
    pub non_arc_srcs: BTreeSet<FilePath>,

    /// Headers
    pub hdrs: BTreeSet<FilePath>,

    /// Resources copied into the product
    pub resources: BTreeSet<FilePath>,
}

impl Inputs {
    /// Create empty inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set ARC sources.
    pub fn with_srcs(mut self, srcs: impl IntoIterator<Item = FilePath>) -> Self {
        self.srcs = srcs.into_iter().collect();
        self
    }

    /// Set non-ARC sources.
    pub fn with_non_arc_srcs(mut self, srcs: impl IntoIterator<Item = FilePath>) -> Self {
        self.non_arc_srcs = srcs.into_iter().collect();
        self
    }

    /// Set headers.
    pub fn with_hdrs(mut self, hdrs: impl IntoIterator<Item = FilePath>) -> Self {
        self.hdrs = hdrs.into_iter().collect();
        self
    }

    /// Set resources.
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = FilePath>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }

    /// Union of every input category.
    pub fn all(&self) -> BTreeSet<FilePath> {
        self.srcs
            .iter()
            .chain(&self.non_arc_srcs)
            .chain(&self.hdrs)
            .chain(&self.resources)
            .cloned()
            .collect()
    }

    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.srcs.is_empty()
            && self.non_arc_srcs.is_empty()
            && self.hdrs.is_empty()
            && self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<FilePath> {
        names.iter().map(|n| FilePath::project(*n)).collect()
    }

    #[test]
    fn test_all_is_union() {
        let inputs = Inputs::new()
            .with_srcs(paths(&["a.m", "b.m"]))
            .with_non_arc_srcs(paths(&["c.m"]))
            .with_hdrs(paths(&["a.h"]))
            .with_resources(paths(&["img.png"]));

        let all = inputs.all();
        assert_eq!(all.len(), 5);
        for set in [&inputs.srcs, &inputs.non_arc_srcs, &inputs.hdrs, &inputs.resources] {
            assert!(set.is_subset(&all));
        }
    }

    #[test]
    fn test_all_collapses_overlap() {
        let inputs = Inputs::new()
            .with_srcs(paths(&["shared.m"]))
            .with_non_arc_srcs(paths(&["shared.m"]))
            .with_hdrs(paths(&["x.h"]));

        assert_eq!(inputs.all().len(), 2);
    }

    #[test]
    fn test_empty_inputs_have_empty_union() {
        let inputs = Inputs::new();
        assert!(inputs.is_empty());
        assert!(inputs.all().is_empty());
    }

    #[test]
    fn test_absent_keys_decode_as_empty() {
        let inputs: Inputs = serde_json::from_str(r#"{"hdrs": ["a.h"]}"#).unwrap();
        assert!(inputs.srcs.is_empty());
        assert!(inputs.non_arc_srcs.is_empty());
        assert!(inputs.resources.is_empty());
        assert_eq!(inputs.hdrs.len(), 1);

        let empty: Inputs = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Inputs::default());
    }

    #[test]
    fn test_decodes_camel_case_keys() {
        let inputs: Inputs =
            serde_json::from_str(r#"{"nonArcSrcs": ["legacy.m", {"t": "e", "_": "x/y.m"}]}"#)
                .unwrap();
        assert!(inputs.non_arc_srcs.contains(&FilePath::project("legacy.m")));
        assert!(inputs.non_arc_srcs.contains(&FilePath::external("x/y.m")));
    }
}
