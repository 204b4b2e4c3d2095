//! The whole build graph as handed over by the extractor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::core::{BuildSetting, FilePath, Target, TargetId};

/// A decoded build graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,

    /// Build-system identity of the project
    pub label: String,

    #[serde(default)]
    pub build_settings: BTreeMap<String, BuildSetting>,

    /// All targets keyed by ID. The merge pass rewrites this map in place.
    #[serde(deserialize_with = "unique_keys")]
    pub targets: BTreeMap<TargetId, Target>,

    /// Targets that may be collapsed together, as recorded by the extractor
    #[serde(default)]
    pub potential_target_merges: BTreeMap<TargetId, BTreeSet<TargetId>>,

    /// Libraries that must be linked regardless of per-target links
    #[serde(default)]
    pub required_links: BTreeSet<PathBuf>,

    /// Files shown in the project for reference only
    #[serde(default)]
    pub extra_files: BTreeSet<FilePath>,
}

impl Project {
    /// Create an empty project.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            label: label.into(),
            build_settings: BTreeMap::new(),
            targets: BTreeMap::new(),
            potential_target_merges: BTreeMap::new(),
            required_links: BTreeSet::new(),
            extra_files: BTreeSet::new(),
        }
    }

    /// Add a target, replacing any existing target with the same ID.
    pub fn with_target(mut self, id: impl Into<TargetId>, target: Target) -> Self {
        self.targets.insert(id.into(), target);
        self
    }

    /// Record a potential merge of `src` into `dest`.
    pub fn with_potential_merge(
        mut self,
        src: impl Into<TargetId>,
        dest: impl Into<TargetId>,
    ) -> Self {
        self.potential_target_merges
            .entry(src.into())
            .or_default()
            .insert(dest.into());
        self
    }

    /// Look up a target.
    pub fn target(&self, id: &str) -> Option<&Target> {
        self.targets.get(id)
    }

    /// Every target a given target may be merged with.
    ///
    /// The stored relation is one-directional; this view is symmetric.
    pub fn merge_candidates(&self, id: &TargetId) -> BTreeSet<&TargetId> {
        let mut candidates: BTreeSet<&TargetId> = self
            .potential_target_merges
            .get(id)
            .into_iter()
            .flatten()
            .collect();

        for (src, dests) in &self.potential_target_merges {
            if dests.contains(id) {
                candidates.insert(src);
            }
        }

        candidates.remove(id);
        candidates
    }
}

/// Decode a map, rejecting repeated keys instead of keeping the last one.
fn unique_keys<'de, D, V>(deserializer: D) -> Result<BTreeMap<TargetId, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = BTreeMap<TargetId, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by target ID")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<TargetId, V>()? {
                if out.contains_key(&key) {
                    return Err(de::Error::custom(format_args!(
                        "duplicate target id `{}`",
                        key
                    )));
                }
                out.insert(key, value);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}
