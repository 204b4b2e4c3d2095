//! Test fixtures for common test scenarios.
//!
//! This module provides pre-built targets and a project spec builder that
//! writes decodable JSON to disk.

use std::path::{Path, PathBuf};

use crate::core::{Os, Platform, Product, ProductType, Project, Target, TargetId};

/// The platform every fixture target builds for.
pub fn test_platform() -> Platform {
    Platform::new(Os::IOs, "arm64", "15.0")
}

/// A target whose product has an artifact at `path`.
pub fn target_with_product(
    name: impl Into<String>,
    product_type: ProductType,
    path: impl Into<PathBuf>,
) -> Target {
    let name = name.into();
    Target::new(
        name.clone(),
        format!("//test:{name}"),
        test_platform(),
        Product::new(product_type, name, path),
    )
    .with_configuration("ios_arm64-dbg")
}

/// A command-line tool target with no product artifact.
pub fn target_without_product(name: impl Into<String>) -> Target {
    let name = name.into();
    Target::new(
        name.clone(),
        format!("//test:{name}"),
        test_platform(),
        Product::without_artifact(ProductType::CommandLineTool, name),
    )
    .with_configuration("ios_arm64-dbg")
}

/// Fixture for a project spec file.
#[derive(Debug, Clone)]
pub struct SpecFixture {
    project: Project,
}

impl SpecFixture {
    /// Create an empty project fixture.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = format!("//{name}");
        SpecFixture {
            project: Project::new(name, label),
        }
    }

    /// Add a framework target.
    pub fn framework(
        self,
        id: impl Into<TargetId>,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        self.target(id, target_with_product(name, ProductType::Framework, path))
    }

    /// Add an arbitrary target.
    pub fn target(mut self, id: impl Into<TargetId>, target: Target) -> Self {
        self.project = self.project.with_target(id, target);
        self
    }

    /// Record a potential merge.
    pub fn merge(mut self, src: impl Into<TargetId>, dest: impl Into<TargetId>) -> Self {
        self.project = self.project.with_potential_merge(src, dest);
        self
    }

    /// The project as built so far.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Serialize the project to spec JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.project).expect("fixture project serializes")
    }

    /// Write the spec to `project.json` under `dir`, returning its path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("project.json");
        std::fs::write(&path, self.to_json()).expect("failed to write fixture spec");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_fixture_round_trips_through_json() {
        let fixture = SpecFixture::new("Demo")
            .framework("a", "A", "bin/A.framework")
            .target("b", target_without_product("B"))
            .merge("a", "b");

        let decoded: Project = serde_json::from_str(&fixture.to_json()).unwrap();
        assert_eq!(&decoded, fixture.project());
    }

    #[test]
    fn test_target_fixtures() {
        let with = target_with_product("App", ProductType::Application, "App.app");
        assert!(with.has_product_artifact());
        assert_eq!(with.label, "//test:App");

        let without = target_without_product("Tool");
        assert!(!without.has_product_artifact());
        assert!(!without.is_test());
    }
}
