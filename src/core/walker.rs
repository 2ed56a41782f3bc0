//! Projection of the tree state into visible rows.
//!
//! [`visible_sequence`] is pure: it reads the store, the expansion set, and
//! the failure log, and never schedules work. Children that are not cached
//! come out as [`RenderItem::Placeholder`]; the caller collects them with
//! [`unresolved`] and loads them.

use std::collections::HashSet;

use crate::core::expansion::ExpansionState;
use crate::core::loader::Failures;
use crate::core::store::NodeStore;
use crate::models::{NodeKind, RenderItem};

enum Step<'a> {
    Visit(&'a str, usize),
    /// Leaving an open directory; pops it off the ancestor path
    Leave,
}

/// Depth-first, pre-order list of the rows visible from `root_id`.
///
/// Returns an empty list while the root itself is not cached. Every declared
/// child gets a row, including repeats and children shared between open
/// directories. A child that is one of its own ancestors is skipped, so a
/// cyclic child list cannot loop forever.
pub fn visible_sequence(
    store: &NodeStore,
    expansion: &ExpansionState,
    failures: &Failures,
    root_id: &str,
) -> Vec<RenderItem> {
    let mut items = Vec::new();
    if !store.contains(root_id) {
        return items;
    }

    let mut path: Vec<&str> = Vec::new();
    let mut stack = vec![Step::Visit(root_id, 0)];

    while let Some(step) = stack.pop() {
        let (id, depth) = match step {
            Step::Visit(id, depth) => (id, depth),
            Step::Leave => {
                path.pop();
                continue;
            }
        };
        if path.contains(&id) {
            continue;
        }

        let Some(node) = store.get(id) else {
            items.push(match failures.get(id) {
                Some(error) => RenderItem::Failed {
                    id: id.to_string(),
                    depth,
                    message: error.to_string(),
                },
                None => RenderItem::Placeholder {
                    id: id.to_string(),
                    depth,
                },
            });
            continue;
        };

        match node.kind {
            NodeKind::File => items.push(RenderItem::File {
                id: id.to_string(),
                name: node.name.clone(),
                depth,
            }),
            NodeKind::Directory => {
                let is_open = expansion.is_expanded(id);
                items.push(RenderItem::Directory {
                    id: id.to_string(),
                    name: node.name.clone(),
                    is_open,
                    depth,
                });
                if is_open {
                    path.push(id);
                    stack.push(Step::Leave);
                    // Reversed so the first declared child is popped first
                    for child in node.child_ids().iter().rev() {
                        stack.push(Step::Visit(child.as_str(), depth + 1));
                    }
                }
            }
        }
    }

    items
}

/// Ids of placeholder rows, in display order, without duplicates.
pub fn unresolved(items: &[RenderItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| item.is_placeholder())
        .map(RenderItem::id)
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoadError;
    use crate::models::Node;

    fn store_of(nodes: &[Node]) -> NodeStore {
        let mut store = NodeStore::new();
        for node in nodes {
            store.put(&node.id, node.clone());
        }
        store
    }

    fn dir(id: &str, is_open: bool, depth: usize) -> RenderItem {
        RenderItem::Directory {
            id: id.to_string(),
            name: id.to_string(),
            is_open,
            depth,
        }
    }

    fn file(id: &str, name: &str, depth: usize) -> RenderItem {
        RenderItem::File {
            id: id.to_string(),
            name: name.to_string(),
            depth,
        }
    }

    fn placeholder(id: &str, depth: usize) -> RenderItem {
        RenderItem::Placeholder {
            id: id.to_string(),
            depth,
        }
    }

    // =========================================================================
    // Root Handling
    // =========================================================================

    #[test]
    fn test_missing_root_renders_nothing() {
        let items = visible_sequence(
            &NodeStore::new(),
            &ExpansionState::with_expanded(["root"]),
            &Failures::new(),
            "root",
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_file_root() {
        let store = store_of(&[Node::file("root", "only.txt")]);
        let items = visible_sequence(&store, &ExpansionState::new(), &Failures::new(), "root");
        assert_eq!(items, vec![file("root", "only.txt", 0)]);
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    #[test]
    fn test_cached_children_depth_first_in_declared_order() {
        let store = store_of(&[
            Node::directory("root", "root", &["z", "m", "a"]),
            Node::directory("z", "z", &["z1", "z2"]),
            Node::file("z1", "z1.txt"),
            Node::file("z2", "z2.txt"),
            Node::file("m", "m.txt"),
            Node::directory("a", "a", &["a1"]),
            Node::file("a1", "a1.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root", "z", "a"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                dir("z", true, 1),
                file("z1", "z1.txt", 2),
                file("z2", "z2.txt", 2),
                file("m", "m.txt", 1),
                dir("a", true, 1),
                file("a1", "a1.txt", 2),
            ]
        );
    }

    #[test]
    fn test_empty_directory() {
        let store = store_of(&[Node::directory("root", "root", &[] as &[&str])]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(items, vec![dir("root", true, 0)]);
    }

    // =========================================================================
    // Closed Directories
    // =========================================================================

    #[test]
    fn test_closed_directory_hides_cached_children() {
        let store = store_of(&[
            Node::directory("root", "root", &["b"]),
            Node::directory("b", "b", &["c"]),
            Node::file("c", "C.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(items, vec![dir("root", true, 0), dir("b", false, 1)]);
        assert!(unresolved(&items).is_empty());
    }

    #[test]
    fn test_closed_directory_yields_no_placeholders() {
        let store = store_of(&[
            Node::directory("root", "root", &["b"]),
            Node::directory("b", "b", &["x", "y"]),
        ]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert!(unresolved(&items).is_empty());
    }

    // =========================================================================
    // Placeholders & Failures
    // =========================================================================

    #[test]
    fn test_uncached_children_become_placeholders() {
        let store = store_of(&[Node::directory("root", "root", &["a", "b"])]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![dir("root", true, 0), placeholder("a", 1), placeholder("b", 1)]
        );
        assert_eq!(unresolved(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_partial_resolution_any_order() {
        let store = store_of(&[
            Node::directory("root", "root", &["a", "b", "c"]),
            Node::file("c", "C.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                placeholder("a", 1),
                placeholder("b", 1),
                file("c", "C.txt", 1),
            ]
        );
    }

    #[test]
    fn test_failed_child_rendered_as_failed() {
        let store = store_of(&[
            Node::directory("root", "root", &["a", "b"]),
            Node::file("a", "A.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root"]);
        let mut failures = Failures::new();
        failures.insert("b".to_string(), LoadError::NotFound("b".to_string()));

        let items = visible_sequence(&store, &expansion, &failures, "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                file("a", "A.txt", 1),
                RenderItem::Failed {
                    id: "b".to_string(),
                    depth: 1,
                    message: "node not found: b".to_string(),
                },
            ]
        );
        assert!(unresolved(&items).is_empty());
    }

    #[test]
    fn test_cycle_does_not_loop() {
        let store = store_of(&[
            Node::directory("root", "root", &["loop"]),
            Node::directory("loop", "loop", &["root", "loop"]),
        ]);
        let expansion = ExpansionState::with_expanded(["root", "loop"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(items, vec![dir("root", true, 0), dir("loop", true, 1)]);
    }

    #[test]
    fn test_cycle_skips_only_ancestors() {
        let store = store_of(&[
            Node::directory("root", "root", &["a", "b"]),
            Node::directory("a", "a", &["b"]),
            Node::directory("b", "b", &["a"]),
        ]);
        let expansion = ExpansionState::with_expanded(["root", "a", "b"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                dir("a", true, 1),
                dir("b", true, 2),
                dir("b", true, 1),
                dir("a", true, 2),
            ]
        );
    }

    // =========================================================================
    // Repeated Children
    // =========================================================================

    #[test]
    fn test_duplicate_child_rendered_twice() {
        let store = store_of(&[
            Node::directory("root", "root", &["a", "a"]),
            Node::file("a", "A.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![dir("root", true, 0), file("a", "A.txt", 1), file("a", "A.txt", 1)]
        );
    }

    #[test]
    fn test_shared_child_under_two_open_directories() {
        let store = store_of(&[
            Node::directory("root", "root", &["b", "c"]),
            Node::directory("b", "b", &["c"]),
            Node::file("c", "C.txt"),
        ]);
        let expansion = ExpansionState::with_expanded(["root", "b"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                dir("b", true, 1),
                file("c", "C.txt", 2),
                file("c", "C.txt", 1),
            ]
        );
    }

    #[test]
    fn test_shared_placeholder_loaded_once() {
        let store = store_of(&[
            Node::directory("root", "root", &["b", "c"]),
            Node::directory("b", "b", &["c"]),
        ]);
        let expansion = ExpansionState::with_expanded(["root", "b"]);

        let items = visible_sequence(&store, &expansion, &Failures::new(), "root");

        assert_eq!(
            items,
            vec![
                dir("root", true, 0),
                dir("b", true, 1),
                placeholder("c", 2),
                placeholder("c", 1),
            ]
        );
        assert_eq!(unresolved(&items), vec!["c"]);
    }

    #[test]
    fn test_unresolved_deduplicates() {
        let items = vec![placeholder("x", 1), placeholder("x", 2), placeholder("y", 1)];
        assert_eq!(unresolved(&items), vec!["x", "y"]);
    }
}
