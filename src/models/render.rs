//! Render items produced by the tree walker.

/// One visible row of the tree, in display order.
///
/// `depth` is the nesting level below the root (root = 0).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderItem {
    File {
        id: String,
        name: String,
        depth: usize,
    },
    Directory {
        id: String,
        name: String,
        is_open: bool,
        depth: usize,
    },
    /// Child whose data has not arrived yet
    Placeholder { id: String, depth: usize },
    /// Child whose fetch failed; not retried automatically
    Failed {
        id: String,
        depth: usize,
        message: String,
    },
}

impl RenderItem {
    /// Identifier of the node this row stands for.
    pub fn id(&self) -> &str {
        match self {
            Self::File { id, .. }
            | Self::Directory { id, .. }
            | Self::Placeholder { id, .. }
            | Self::Failed { id, .. } => id,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Self::File { depth, .. }
            | Self::Directory { depth, .. }
            | Self::Placeholder { depth, .. }
            | Self::Failed { depth, .. } => *depth,
        }
    }

    /// Check if this row is still waiting for node data.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}
