//! Target definitions - one build unit of the build graph.
//!
//! Targets are decoded from the extractor's output and are read-only to the
//! assembly core. The fields declared `pub` and mutable here (`package_bin_dir`,
//! `is_swift`, search paths, inputs, links, dependencies) are rewritten by the
//! target merge pass, which runs outside this crate.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{BuildSetting, FilePath, Inputs, Platform, Product, TargetId};

/// Header and framework search paths.
///
/// Order is significant to the compiler and is preserved as decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPaths {
    pub framework_includes: Vec<FilePath>,
    pub quote_includes: Vec<FilePath>,
    pub includes: Vec<FilePath>,
    pub system_includes: Vec<FilePath>,
}

impl SearchPaths {
    /// True when no search paths are set.
    pub fn is_empty(&self) -> bool {
        self.framework_includes.is_empty()
            && self.quote_includes.is_empty()
            && self.includes.is_empty()
            && self.system_includes.is_empty()
    }
}

/// A build target with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Display name
    pub name: String,

    /// Build-system label (e.g. `//app:App`)
    pub label: String,

    /// Build configuration name
    pub configuration: String,

    /// Directory the build system writes this package's outputs to
    pub package_bin_dir: PathBuf,

    pub platform: Platform,

    pub product: Product,

    #[serde(default)]
    pub is_swift: bool,

    /// The application or bundle a test target runs against
    #[serde(default)]
    pub test_host: Option<TargetId>,

    #[serde(default)]
    pub build_settings: BTreeMap<String, BuildSetting>,

    #[serde(default)]
    pub search_paths: SearchPaths,

    /// Frameworks in link order
    #[serde(default)]
    pub frameworks: Vec<FilePath>,

    /// Clang module maps in command-line order
    #[serde(default)]
    pub modulemaps: Vec<FilePath>,

    /// Swift modules in command-line order
    #[serde(default)]
    pub swiftmodules: Vec<FilePath>,

    /// Nested bundle products owned by this target
    #[serde(default)]
    pub resource_bundle_products: BTreeSet<PathBuf>,

    #[serde(default)]
    pub inputs: Inputs,

    /// Libraries to link
    #[serde(default)]
    pub links: BTreeSet<PathBuf>,

    #[serde(default)]
    pub dependencies: BTreeSet<TargetId>,
}

impl Target {
    /// Create a new target with empty collections.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        platform: Platform,
        product: Product,
    ) -> Self {
        Target {
            name: name.into(),
            label: label.into(),
            configuration: String::new(),
            package_bin_dir: PathBuf::new(),
            platform,
            product,
            is_swift: false,
            test_host: None,
            build_settings: BTreeMap::new(),
            search_paths: SearchPaths::default(),
            frameworks: Vec::new(),
            modulemaps: Vec::new(),
            swiftmodules: Vec::new(),
            resource_bundle_products: BTreeSet::new(),
            inputs: Inputs::default(),
            links: BTreeSet::new(),
            dependencies: BTreeSet::new(),
        }
    }

    /// Set the build configuration.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    /// Set the test host.
    pub fn with_test_host(mut self, host: impl Into<TargetId>) -> Self {
        self.test_host = Some(host.into());
        self
    }

    /// Set the inputs.
    pub fn with_inputs(mut self, inputs: Inputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Add dependencies.
    pub fn with_dependencies(
        mut self,
        deps: impl IntoIterator<Item = impl Into<TargetId>>,
    ) -> Self {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }

    /// Check if this target produces an artifact.
    pub fn has_product_artifact(&self) -> bool {
        self.product.path.is_some()
    }

    /// Check if this is a test target.
    pub fn is_test(&self) -> bool {
        self.product.product_type.is_test_bundle()
    }
}
