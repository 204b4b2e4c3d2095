//! Rendering of assembly results for the command line.

use std::collections::BTreeMap;
use std::fmt::Write;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::core::{Project, TargetId};
use crate::document::{create_products, FileReference, Group, Node, ProductId, Products};
use crate::ordering::{sorted_by_natural_key, NamePath};
use crate::util::diagnostic::suggestions;

/// A product node together with its registry identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductEntry {
    pub id: ProductId,
    #[serde(flatten)]
    pub node: FileReference,
}

/// Serializable view of an assembled Products group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsReport {
    pub project: String,
    pub group: Group,
    pub by_target: BTreeMap<TargetId, Option<ProductEntry>>,
    pub by_path: BTreeMap<String, ProductEntry>,
}

impl ProductsReport {
    /// Assemble the Products group for `project` and capture the result.
    pub fn assemble(project: &Project) -> Self {
        let (products, group) = create_products(&project.targets);
        Self::new(&project.name, &products, group)
    }

    pub fn new(project: &str, products: &Products, group: Group) -> Self {
        let entry = |id: ProductId| {
            products.node(id).map(|node| ProductEntry {
                id,
                node: node.clone(),
            })
        };

        ProductsReport {
            project: project.to_string(),
            group,
            by_target: products
                .by_target()
                .iter()
                .map(|(target, id)| (target.clone(), id.and_then(entry)))
                .collect(),
            by_path: products
                .by_path()
                .iter()
                .filter_map(|(path, id)| Some((path.display().to_string(), entry(*id)?)))
                .collect(),
        }
    }

    /// Render as indented text: the group tree, then both lookup tables.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        writeln!(out, "{}", self.project).unwrap();
        out.push_str(&render_tree(&self.group));

        out.push_str("\nby target:\n");
        for (target, entry) in &self.by_target {
            match entry {
                Some(entry) => {
                    writeln!(out, "  {} -> {}", target, describe(entry)).unwrap();
                }
                None => {
                    writeln!(out, "  {} -> (no product)", target).unwrap();
                }
            }
        }

        out.push_str("\nby path:\n");
        for (path, entry) in &self.by_path {
            writeln!(out, "  {} -> {}", path, describe(entry)).unwrap();
        }

        out
    }
}

fn describe(entry: &ProductEntry) -> String {
    match &entry.node.explicit_file_type {
        Some(file_type) => format!(
            "{} [{}] #{}",
            entry.node.display_name(),
            file_type,
            entry.id.index()
        ),
        None => format!("{} #{}", entry.node.display_name(), entry.id.index()),
    }
}

/// Render a group and its descendants as a box-drawing tree.
pub fn render_tree(group: &Group) -> String {
    let mut out = String::new();
    writeln!(out, "{}", group.name().or(group.path()).unwrap_or("/")).unwrap();
    render_children(&group.children, "", &mut out);
    out
}

fn render_children(children: &[Node], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        writeln!(out, "{}{}{}", prefix, branch, child.display_name()).unwrap();

        if let Node::Group(group) = child {
            render_children(&group.children, &format!("{}{}", prefix, indent), out);
        }
    }
}

/// List each target's input files in natural order.
///
/// Targets are listed in target ID order. With `only`, just that target is
/// listed, and an unknown ID is an error.
pub fn render_inputs(project: &Project, only: Option<&str>) -> Result<String> {
    let targets: Vec<(&TargetId, _)> = match only {
        Some(id) => match project.targets.get_key_value(id) {
            Some(entry) => vec![entry],
            None => bail!(
                "no target `{}` in project `{}`\nhelp: {}",
                id,
                project.name,
                suggestions::LIST_TARGETS
            ),
        },
        None => project.targets.iter().collect(),
    };

    let mut out = String::new();
    for (id, target) in targets {
        let files = sorted_by_natural_key(target.inputs.all(), |file| file.to_string());
        writeln!(out, "{} ({} files)", id, files.len()).unwrap();
        for file in files {
            writeln!(out, "  {}", file).unwrap();
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FilePath, Inputs, ProductType};
    use crate::test_support::fixtures::{target_with_product, target_without_product, SpecFixture};

    fn project() -> Project {
        SpecFixture::new("Demo")
            .framework("A", "A", "bin/A.framework")
            .target("B", target_without_product("B"))
            .target("C", target_with_product("C", ProductType::Application, "bin/C.app"))
            .project()
            .clone()
    }

    #[test]
    fn test_report_tables() {
        let report = ProductsReport::assemble(&project());

        assert_eq!(report.by_target.len(), 3);
        assert_eq!(report.by_target[&TargetId::new("B")], None);
        assert_eq!(report.by_path.len(), 2);
        assert_eq!(report.by_path["bin/C.app"].node.display_name(), "C.app");
    }

    #[test]
    fn test_render_text() {
        let text = ProductsReport::assemble(&project()).render_text();

        assert!(text.starts_with("Demo\nProducts\n├── A.framework\n└── C.app\n"));
        assert!(text.contains("  B -> (no product)"));
        assert!(text.contains("  bin/A.framework -> A.framework [wrapper.framework] #0"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = ProductsReport::assemble(&project());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["project"], "Demo");
        assert_eq!(json["group"]["name"], "Products");
        assert!(json["byTarget"]["B"].is_null());
        assert_eq!(json["byTarget"]["C"]["path"], "C.app");
        assert_eq!(json["byTarget"]["C"]["id"], 1);
        assert_eq!(json["byPath"]["bin/A.framework"]["explicitFileType"], "wrapper.framework");
    }

    #[test]
    fn test_render_nested_tree() {
        let group = Group::named("Root").with_children([
            Node::from(Group::at_path("Sources").with_children([
                Node::from(FileReference::new(Default::default(), "a.m")),
                Node::from(FileReference::new(Default::default(), "b.m")),
            ])),
            Node::from(FileReference::new(Default::default(), "README")),
        ]);

        assert_eq!(
            render_tree(&group),
            "Root\n├── Sources\n│   ├── a.m\n│   └── b.m\n└── README\n"
        );
    }

    #[test]
    fn test_render_inputs_natural_order() {
        let inputs = Inputs::new()
            .with_srcs([FilePath::project("src/File10.m"), FilePath::project("src/File2.m")])
            .with_hdrs([FilePath::project("src/File2.h")])
            .with_resources([FilePath::generated("res/Assets.car")]);
        let project = SpecFixture::new("Demo")
            .target("app", target_without_product("App").with_inputs(inputs))
            .target("lib", target_without_product("Lib"))
            .project()
            .clone();

        let text = render_inputs(&project, None).unwrap();
        assert_eq!(
            text,
            "app (4 files)\n  bazel-out/res/Assets.car\n  src/File2.h\n  src/File2.m\n  src/File10.m\nlib (0 files)\n"
        );

        let only = render_inputs(&project, Some("lib")).unwrap();
        assert_eq!(only, "lib (0 files)\n");
    }

    #[test]
    fn test_render_inputs_unknown_target() {
        let err = render_inputs(&project(), Some("missing")).unwrap_err();
        assert!(err.to_string().contains("no target `missing`"));
    }
}
