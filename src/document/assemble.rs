//! Products group assembly.
//!
//! Turns each target's product into a file reference, registers it, and
//! builds the "Products" group the IDE shows at the bottom of the navigator.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{Target, TargetId};
use crate::document::node::{FileReference, Group, SourceTree};
use crate::document::products::{ProductKeys, Products};

/// Name of the group holding product references.
pub const PRODUCTS_GROUP_NAME: &str = "Products";

/// Build the products registry and the "Products" group for `targets`.
///
/// Targets are visited in target ID order, so when two targets declare the
/// same product path the lexicographically later ID owns the path entry.
pub fn create_products(targets: &BTreeMap<TargetId, Target>) -> (Products, Group) {
    let mut products = Products::new();

    for (id, target) in targets {
        let Some(product_path) = target.product.path() else {
            debug!(target = %id, "no product artifact");
            products.add(None, ProductKeys::new(id.clone(), None));
            continue;
        };

        let product = product_reference(target, product_path);
        debug!(target = %id, path = %product_path.display(), "registering product");

        let displaced = products.add(
            Some(product),
            ProductKeys::new(id.clone(), Some(product_path.to_path_buf())),
        );
        if displaced.is_some() {
            warn!(
                "product path `{}` is declared by more than one target; `{}` takes it",
                product_path.display(),
                id
            );
        }
    }

    let group = Group::named(PRODUCTS_GROUP_NAME).with_children(products.group_members());

    (products, group)
}

fn product_reference(target: &Target, product_path: &Path) -> FileReference {
    let file_name = product_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| product_path.display().to_string());

    FileReference::new(SourceTree::BuildProductsDir, file_name)
        .with_explicit_file_type(target.product.product_type.file_type())
        .not_indexed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Product, ProductType};
    use crate::test_support::fixtures::{target_with_product, target_without_product};

    fn targets(entries: Vec<(&str, Target)>) -> BTreeMap<TargetId, Target> {
        entries
            .into_iter()
            .map(|(id, target)| (TargetId::new(id), target))
            .collect()
    }

    #[test]
    fn test_products_group_end_to_end() {
        let targets = targets(vec![
            ("C", target_with_product("C", ProductType::Application, "bin/C.app")),
            ("B", target_without_product("B")),
            ("A", target_with_product("A", ProductType::Framework, "bin/A.framework")),
        ]);

        let (products, group) = create_products(&targets);

        assert_eq!(group.name.as_deref(), Some("Products"));
        assert_eq!(group.source_tree, SourceTree::Group);
        assert_eq!(group.child_names(), vec!["A.framework", "C.app"]);

        assert_eq!(products.by_target().len(), 3);
        assert_eq!(products.for_target("B"), Some(None));
        assert_eq!(products.by_path().len(), 2);
        assert!(products.for_path(Path::new("bin/A.framework")).is_some());
        assert!(products.for_path(Path::new("bin/C.app")).is_some());
    }

    #[test]
    fn test_product_reference_shape() {
        let targets = targets(vec![(
            "lib",
            target_with_product("Lib", ProductType::StaticLibrary, "out/x/libLib.a"),
        )]);

        let (products, _) = create_products(&targets);
        let node = products.for_target("lib").flatten().unwrap();

        assert_eq!(node.path.as_deref(), Some("libLib.a"));
        assert_eq!(node.name, None);
        assert_eq!(node.source_tree, SourceTree::BuildProductsDir);
        assert_eq!(node.explicit_file_type.as_deref(), Some("archive.ar"));
        assert!(!node.include_in_index);
    }

    #[test]
    fn test_absent_products_do_not_touch_path_index() {
        let targets = targets(vec![
            ("x", target_without_product("X")),
            ("y", target_without_product("Y")),
        ]);

        let (products, group) = create_products(&targets);

        assert_eq!(products.len(), 2);
        assert!(products.by_path().is_empty());
        assert!(group.children.is_empty());
    }

    #[test]
    fn test_collision_resolved_by_target_order() {
        let targets = targets(vec![
            ("E", target_with_product("E", ProductType::Bundle, "X.bundle")),
            ("D", target_with_product("D", ProductType::UnitTestBundle, "X.bundle")),
        ]);

        let (products, group) = create_products(&targets);

        let d = products.by_target()[&TargetId::new("D")].unwrap();
        let e = products.by_target()[&TargetId::new("E")].unwrap();
        assert_ne!(d, e);
        assert_eq!(products.by_path()[Path::new("X.bundle")], e);
        assert_eq!(group.children.len(), 2);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let build = || {
            targets(vec![
                ("t10", target_with_product("T10", ProductType::Framework, "T10.framework")),
                ("t2", target_with_product("T2", ProductType::Framework, "T2.framework")),
                ("t1", target_with_product("t2", ProductType::Framework, "t2.framework")),
            ])
        };

        let (_, first) = create_products(&build());
        let (_, second) = create_products(&build());
        assert_eq!(first, second);
        assert_eq!(
            first.child_names(),
            vec!["t2.framework", "T2.framework", "T10.framework"]
        );
    }

    #[test]
    fn test_path_without_file_name_used_verbatim() {
        let mut target = target_without_product("Odd");
        target.product = Product::new(ProductType::Bundle, "Odd", "..");
        let targets = targets(vec![("odd", target)]);

        let (products, _) = create_products(&targets);
        let node = products.for_target("odd").flatten().unwrap();
        assert_eq!(node.path.as_deref(), Some(".."));
    }
}
