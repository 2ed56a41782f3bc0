use serde::{Deserialize, Serialize};

// =============================================================================
// Node Records
// =============================================================================

/// Kind of a tree node, serialized as the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// A file or directory record as returned by the node lookup service.
///
/// Wire form: `{ "id", "name", "type": "file" | "directory", "children"?: [..] }`.
/// Only directories carry `children`; the order of the list is the display
/// order of the directory's entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Node {
    /// Stable unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Declared child ids (directories only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

impl Node {
    /// Create a file node.
    pub fn file(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: NodeKind::File,
            children: None,
        }
    }

    /// Create a directory node with its declared children.
    pub fn directory<S: AsRef<str>>(id: &str, name: &str, children: &[S]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: NodeKind::Directory,
            children: Some(children.iter().map(|c| c.as_ref().to_string()).collect()),
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Declared child ids in display order.
    ///
    /// Always empty for files, and for directories that did not declare a
    /// child list.
    pub fn child_ids(&self) -> &[String] {
        match (self.kind, &self.children) {
            (NodeKind::Directory, Some(children)) => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_directory() {
        let json = r#"{"id":"root","name":"Root","type":"directory","children":["a","b"]}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert!(node.is_directory());
        assert_eq!(node.child_ids(), ["a", "b"]);
        assert_eq!(node, Node::directory("root", "Root", &["a", "b"]));
    }

    #[test]
    fn test_deserialize_file_without_children() {
        let json = r#"{"id":"a","name":"A.txt","type":"file"}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert!(!node.is_directory());
        assert!(node.child_ids().is_empty());
    }

    #[test]
    fn test_file_ignores_stray_children() {
        let json = r#"{"id":"a","name":"A.txt","type":"file","children":["x"]}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert!(node.child_ids().is_empty());
    }

    #[test]
    fn test_directory_without_children_key() {
        let json = r#"{"id":"d","name":"empty","type":"directory"}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert!(node.is_directory());
        assert!(node.children.is_none());
        assert!(node.child_ids().is_empty());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{"id":"x","name":"x","type":"symlink"}"#;
        assert!(serde_json::from_str::<Node>(json).is_err());
    }

    #[test]
    fn test_serialize_file_omits_children() {
        let json = serde_json::to_string(&Node::file("a", "A.txt")).unwrap();
        assert_eq!(json, r#"{"id":"a","name":"A.txt","type":"file"}"#);
    }
}
