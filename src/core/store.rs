use std::collections::HashMap;

use crate::models::Node;

/// Append-only cache of fetched nodes, keyed by identifier.
///
/// Entries are the source of truth for rendering. Nothing is ever removed;
/// the loader is the only writer and inserts each id once.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    nodes: HashMap<String, Node>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached node.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Insert a node under `id`, overwriting any previous entry.
    pub fn put(&mut self, id: &str, node: Node) {
        self.nodes.insert(id.to_string(), node);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = NodeStore::new();
        assert!(store.get("root").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = NodeStore::new();
        store.put("a", Node::file("a", "A.txt"));

        assert!(store.contains("a"));
        assert_eq!(store.get("a"), Some(&Node::file("a", "A.txt")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_repeated_put_is_idempotent() {
        let mut store = NodeStore::new();
        store.put("a", Node::file("a", "A.txt"));
        store.put("a", Node::file("a", "A.txt"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").map(|n| n.name.as_str()), Some("A.txt"));
    }
}
