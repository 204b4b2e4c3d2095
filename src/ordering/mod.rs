//! Deterministic ordering of everything we emit.
//!
//! Targets, files and products reach us in maps and sets whose iteration
//! order carries no meaning. Every sequence handed to the project writer goes
//! through this module so that identical input yields identical output.
//!
//! Entities are keyed by `"{name or path}\t{name}\t{path}"`, compared with
//! [`natural_cmp`]. Containers sort before leaves at every level.

mod natural;

pub use natural::natural_cmp;

use crate::core::TargetId;

/// Anything that sorts by an optional name and an optional path.
pub trait NamePath {
    fn name(&self) -> Option<&str>;
    fn path(&self) -> Option<&str>;

    /// The sort key: primary `name` falling back to `path`, then `name`,
    /// then `path` as tie-breaks.
    fn name_path_sort_key(&self) -> String {
        let name = self.name();
        let path = self.path();
        format!(
            "{}\t{}\t{}",
            name.or(path).unwrap_or(""),
            name.unwrap_or(""),
            path.unwrap_or("")
        )
    }
}

/// Entities that are either containers or leaves.
pub trait Grouped: NamePath + Sized {
    /// Children of a container, `None` for a leaf.
    fn children_mut(&mut self) -> Option<&mut Vec<Self>>;

    fn is_container(&self) -> bool;
}

/// Sort `items` by a precomputed natural-order key.
///
/// Each key is computed once; the sort is stable.
pub fn sorted_by_natural_key<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut keyed: Vec<(String, T)> = items.into_iter().map(|item| (key(&item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| natural_cmp(a, b));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Sort plain strings in natural order.
pub fn sorted_natural<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<S> {
    let mut items: Vec<S> = items.into_iter().collect();
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
    items
}

/// Sort name/path entities (file elements, build files) in natural order.
pub fn sorted_by_name_path<T: NamePath>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    sorted_by_natural_key(items, |item| item.name_path_sort_key())
}

/// Sort entities owned by targets.
///
/// The owning target ID is appended to the key, so equally named entries from
/// different targets still land in a fixed order.
pub fn sorted_by_target<'a, T: NamePath>(
    entries: impl IntoIterator<Item = (&'a TargetId, T)>,
) -> Vec<(&'a TargetId, T)> {
    sorted_by_natural_key(entries, |(id, item)| {
        format!("{}\t{}", item.name_path_sort_key(), id)
    })
}

/// Sort siblings with containers first, then recurse into each container.
pub fn sort_grouped<T: Grouped>(items: &mut Vec<T>) {
    let mut keyed: Vec<(bool, String, T)> = items
        .drain(..)
        .map(|item| (!item.is_container(), item.name_path_sort_key(), item))
        .collect();
    keyed.sort_by(|(l_leaf, l_key, _), (r_leaf, r_key, _)| {
        l_leaf.cmp(r_leaf).then_with(|| natural_cmp(l_key, r_key))
    });
    items.extend(keyed.into_iter().map(|(_, _, item)| item));

    for item in items.iter_mut() {
        if let Some(children) = item.children_mut() {
            sort_grouped(children);
        }
    }
}

impl<T: NamePath + ?Sized> NamePath for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn path(&self) -> Option<&str> {
        (**self).path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Entry {
        Dir(&'static str, Vec<Entry>),
        File(Option<&'static str>, Option<&'static str>),
    }

    impl NamePath for Entry {
        fn name(&self) -> Option<&str> {
            match self {
                Entry::Dir(name, _) => Some(*name),
                Entry::File(name, _) => *name,
            }
        }

        fn path(&self) -> Option<&str> {
            match self {
                Entry::Dir(..) => None,
                Entry::File(_, path) => *path,
            }
        }
    }

    impl Grouped for Entry {
        fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
            match self {
                Entry::Dir(_, children) => Some(children),
                Entry::File(..) => None,
            }
        }

        fn is_container(&self) -> bool {
            matches!(self, Entry::Dir(..))
        }
    }

    fn file(path: &'static str) -> Entry {
        Entry::File(None, Some(path))
    }

    #[test]
    fn test_sorted_natural_strings() {
        assert_eq!(sorted_natural(["b10", "b2", "a"]), vec!["a", "b2", "b10"]);
    }

    #[test]
    fn test_sort_key_prefers_name_over_path() {
        assert_eq!(Entry::File(Some("N"), Some("p/q")).name_path_sort_key(), "N\tN\tp/q");
        assert_eq!(Entry::File(None, Some("p/q")).name_path_sort_key(), "p/q\t\tp/q");
        assert_eq!(Entry::File(None, None).name_path_sort_key(), "\t\t");
    }

    #[test]
    fn test_name_wins_over_path_for_primary_key() {
        let sorted = sorted_by_name_path(vec![
            Entry::File(Some("b"), Some("a.txt")),
            Entry::File(None, Some("a2.txt")),
        ]);
        assert_eq!(sorted[0], file("a2.txt"));
    }

    #[test]
    fn test_tie_break_on_path() {
        let sorted = sorted_by_name_path(vec![
            Entry::File(Some("Info.plist"), Some("z/Info.plist")),
            Entry::File(Some("Info.plist"), Some("a/Info.plist")),
        ]);
        assert_eq!(sorted[0].path(), Some("a/Info.plist"));
    }

    #[test]
    fn test_containers_before_leaves() {
        let mut items = vec![file("A"), Entry::Dir("Z", vec![])];
        sort_grouped(&mut items);
        assert_eq!(items, vec![Entry::Dir("Z", vec![]), file("A")]);
    }

    #[test]
    fn test_grouped_sort_recurses() {
        let mut items = vec![
            file("b.swift"),
            Entry::Dir(
                "Sources",
                vec![file("x10.m"), Entry::Dir("Inner", vec![file("2"), file("1")]), file("x9.m")],
            ),
            file("a.swift"),
        ];
        sort_grouped(&mut items);

        assert_eq!(
            items,
            vec![
                Entry::Dir(
                    "Sources",
                    vec![
                        Entry::Dir("Inner", vec![file("1"), file("2")]),
                        file("x9.m"),
                        file("x10.m"),
                    ],
                ),
                file("a.swift"),
                file("b.swift"),
            ]
        );
    }

    #[test]
    fn test_sorted_by_target_breaks_ties_with_id() {
        let a = TargetId::new("a");
        let b = TargetId::new("b");
        let same = file("Lib.framework");

        let sorted = sorted_by_target(vec![(&b, &same), (&a, &same)]);
        assert_eq!(sorted[0].0, &a);
        assert_eq!(sorted[1].0, &b);
    }

    #[test]
    fn test_sorting_sorted_input_is_noop() {
        let once = sorted_by_name_path(vec![file("c10"), file("C2"), file("c2"), file("a")]);
        let twice = sorted_by_name_path(once.clone());
        assert_eq!(once, twice);
    }
}
