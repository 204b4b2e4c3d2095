//! Project document nodes.
//!
//! The document tree is made of groups (containers) and file references
//! (leaves). Build files wrap a node to record that a build phase uses it.

use serde::{Deserialize, Serialize};

use crate::ordering::{Grouped, NamePath};

/// What a node's path is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceTree {
    /// Relative to the enclosing group
    #[default]
    #[serde(rename = "<group>")]
    Group,
    /// Relative to the built products directory
    #[serde(rename = "BUILT_PRODUCTS_DIR")]
    BuildProductsDir,
}

/// A reference to a single file or bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub source_tree: SourceTree,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// File type set by the generator rather than inferred by the IDE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_file_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_known_file_type: Option<String>,

    /// Whether the IDE indexes this file
    pub include_in_index: bool,
}

impl FileReference {
    /// Create a reference to `path`, indexed, with no file type.
    pub fn new(source_tree: SourceTree, path: impl Into<String>) -> Self {
        FileReference {
            source_tree,
            name: None,
            path: Some(path.into()),
            explicit_file_type: None,
            last_known_file_type: None,
            include_in_index: true,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the explicit file type.
    pub fn with_explicit_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.explicit_file_type = Some(file_type.into());
        self
    }

    /// Exclude from indexing.
    pub fn not_indexed(mut self) -> Self {
        self.include_in_index = false;
        self
    }

    /// The name shown in the IDE: the name if set, otherwise the path.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().or(self.path.as_deref()).unwrap_or("")
    }
}

/// A container of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub source_tree: SourceTree,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default)]
    pub children: Vec<Node>,
}

impl Group {
    /// Create an empty named group relative to its parent.
    pub fn named(name: impl Into<String>) -> Self {
        Group {
            source_tree: SourceTree::Group,
            name: Some(name.into()),
            path: None,
            children: Vec::new(),
        }
    }

    /// Create an empty group for a directory relative to its parent.
    pub fn at_path(path: impl Into<String>) -> Self {
        Group {
            source_tree: SourceTree::Group,
            name: None,
            path: Some(path.into()),
            children: Vec::new(),
        }
    }

    /// Set the children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Display names of the direct children, in order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(Node::display_name).collect()
    }
}

/// A node in the project document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "isa")]
pub enum Node {
    #[serde(rename = "PBXGroup")]
    Group(Group),
    #[serde(rename = "PBXFileReference")]
    File(FileReference),
}

impl Node {
    /// The file reference, if this is a leaf.
    pub fn as_file(&self) -> Option<&FileReference> {
        match self {
            Node::File(file) => Some(file),
            Node::Group(_) => None,
        }
    }

    /// The group, if this is a container.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::File(_) => None,
        }
    }

    /// The name shown in the IDE.
    pub fn display_name(&self) -> &str {
        self.name().or(self.path()).unwrap_or("")
    }
}

impl From<FileReference> for Node {
    fn from(file: FileReference) -> Self {
        Node::File(file)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// A node as used by a build phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFile {
    pub file: Node,

    /// Per-file compiler flags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compiler_flags: Vec<String>,
}

impl BuildFile {
    pub fn new(file: impl Into<Node>) -> Self {
        BuildFile {
            file: file.into(),
            compiler_flags: Vec::new(),
        }
    }
}

impl NamePath for FileReference {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl NamePath for Group {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl NamePath for Node {
    fn name(&self) -> Option<&str> {
        match self {
            Node::Group(group) => group.name(),
            Node::File(file) => file.name(),
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            Node::Group(group) => group.path(),
            Node::File(file) => file.path(),
        }
    }
}

impl NamePath for BuildFile {
    fn name(&self) -> Option<&str> {
        self.file.name()
    }

    fn path(&self) -> Option<&str> {
        self.file.path()
    }
}

impl Grouped for Node {
    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Node::Group(group) => Some(&mut group.children),
            Node::File(_) => None,
        }
    }

    fn is_container(&self) -> bool {
        matches!(self, Node::Group(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{sort_grouped, sorted_by_name_path};

    fn file(path: &str) -> Node {
        FileReference::new(SourceTree::Group, path).into()
    }

    #[test]
    fn test_group_before_file() {
        let mut nodes = vec![file("A"), Group::named("Z").into()];
        sort_grouped(&mut nodes);

        assert_eq!(nodes[0].display_name(), "Z");
        assert_eq!(nodes[1].display_name(), "A");
    }

    #[test]
    fn test_nested_groups_sorted_depth_first() {
        let inner = Group::at_path("Inner").with_children([file("b10.m"), file("b2.m")]);
        let outer = Group::at_path("Outer").with_children([file("z.m"), inner.into(), file("a.m")]);
        let mut nodes = vec![file("top.m"), outer.into()];

        sort_grouped(&mut nodes);

        let outer = nodes[0].as_group().unwrap();
        assert_eq!(outer.child_names(), vec!["Inner", "a.m", "z.m"]);
        let inner = outer.children[0].as_group().unwrap();
        assert_eq!(inner.child_names(), vec!["b2.m", "b10.m"]);
        assert_eq!(nodes[1].display_name(), "top.m");
    }

    #[test]
    fn test_build_files_sort_by_wrapped_file() {
        let sorted = sorted_by_name_path(vec![
            BuildFile::new(FileReference::new(SourceTree::Group, "View10.swift")),
            BuildFile::new(FileReference::new(SourceTree::Group, "View9.swift")),
            BuildFile::new(
                FileReference::new(SourceTree::Group, "z/Model.swift").with_name("Model.swift"),
            ),
        ]);

        let names: Vec<_> = sorted.iter().map(|b| b.file.display_name()).collect();
        assert_eq!(names, vec!["Model.swift", "View9.swift", "View10.swift"]);
    }

    #[test]
    fn test_node_serializes_with_isa_tag() {
        let node: Node = FileReference::new(SourceTree::BuildProductsDir, "App.app")
            .with_explicit_file_type("wrapper.application")
            .not_indexed()
            .into();

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["isa"], "PBXFileReference");
        assert_eq!(json["sourceTree"], "BUILT_PRODUCTS_DIR");
        assert_eq!(json["includeInIndex"], false);
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_path() {
        let file = FileReference::new(SourceTree::Group, "a/b.swift");
        assert_eq!(file.display_name(), "a/b.swift");
        assert_eq!(file.with_name("b").display_name(), "b");
    }
}
