//! The products registry.
//!
//! Maps each target to the product node it builds (or to nothing), and each
//! product path to its node. Nodes are owned by the registry and referred to
//! by [`ProductId`]; two targets share a node only when they were aliased to
//! the same path.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::TargetId;
use crate::document::node::{FileReference, Node};
use crate::ordering::{sorted_by_target, NamePath};

/// Identity of a product node within a [`Products`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(usize);

impl ProductId {
    /// Registration index, starting at zero.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The keys a product is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKeys {
    pub target: TargetId,
    pub path: Option<PathBuf>,
}

impl ProductKeys {
    pub fn new(target: impl Into<TargetId>, path: Option<PathBuf>) -> Self {
        ProductKeys {
            target: target.into(),
            path,
        }
    }
}

/// Target and path lookup tables for product nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Products {
    nodes: Vec<FileReference>,
    by_target: BTreeMap<TargetId, Option<ProductId>>,
    by_path: BTreeMap<PathBuf, ProductId>,
}

impl Products {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target's product.
    ///
    /// With no product, the target is recorded as artifact-less and the path
    /// index is left alone. Otherwise the node is stored and indexed by target
    /// and, when `keys.path` is set, by path. A path that is already indexed
    /// is taken over by the new node; the displaced node is returned.
    pub fn add(&mut self, product: Option<FileReference>, keys: ProductKeys) -> Option<ProductId> {
        let Some(product) = product else {
            self.by_target.insert(keys.target, None);
            return None;
        };

        let id = ProductId(self.nodes.len());
        self.nodes.push(product);
        self.by_target.insert(keys.target, Some(id));

        let path = keys.path?;
        self.by_path.insert(path, id)
    }

    /// Point `target` at the node already registered for `path`.
    ///
    /// Returns the shared node's ID, or `None` (leaving the registry
    /// untouched) if nothing is registered for `path`.
    pub fn alias(&mut self, target: impl Into<TargetId>, path: &Path) -> Option<ProductId> {
        let id = *self.by_path.get(path)?;
        self.by_target.insert(target.into(), Some(id));
        Some(id)
    }

    /// Look up a node by ID.
    ///
    /// `None` when `id` was issued by a different registry.
    pub fn node(&self, id: ProductId) -> Option<&FileReference> {
        self.nodes.get(id.0)
    }

    /// IDs in the lookup tables are always issued by `add`.
    fn resolve(&self, id: ProductId) -> &FileReference {
        &self.nodes[id.0]
    }

    /// The product registered for a target.
    ///
    /// `None` when the target is unknown; `Some(None)` when it has no product.
    pub fn for_target(&self, target: &str) -> Option<Option<&FileReference>> {
        self.by_target
            .get(target)
            .map(|id| id.map(|id| self.resolve(id)))
    }

    /// The product currently indexed for a path.
    pub fn for_path(&self, path: &Path) -> Option<&FileReference> {
        self.by_path.get(path).map(|id| self.resolve(*id))
    }

    /// Target to product table.
    pub fn by_target(&self) -> &BTreeMap<TargetId, Option<ProductId>> {
        &self.by_target
    }

    /// Path to product table.
    pub fn by_path(&self) -> &BTreeMap<PathBuf, ProductId> {
        &self.by_path
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.by_target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }

    /// Members of the Products group, in display order.
    ///
    /// Every registered node appears once, however many targets point at it,
    /// ordered by its name/path key and then by the owning target ID.
    pub fn group_members(&self) -> Vec<Node> {
        let entries = self
            .by_target
            .iter()
            .filter_map(|(target, id)| id.map(|id| (target, Keyed(id, self.resolve(id)))));

        let mut seen = BTreeSet::new();
        sorted_by_target(entries)
            .into_iter()
            .filter(|(_, Keyed(id, _))| seen.insert(*id))
            .map(|(_, Keyed(_, node))| Node::File(node.clone()))
            .collect()
    }
}

impl FromIterator<(ProductKeys, Option<FileReference>)> for Products {
    fn from_iter<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProductKeys, Option<FileReference>)>,
    {
        let mut products = Products::new();
        for (keys, product) in entries {
            products.add(product, keys);
        }
        products
    }
}

/// A node paired with its identity, sorted by the node.
struct Keyed<'a>(ProductId, &'a FileReference);

impl NamePath for Keyed<'_> {
    fn name(&self) -> Option<&str> {
        self.1.name.as_deref()
    }

    fn path(&self) -> Option<&str> {
        self.1.path.as_deref()
    }
}
