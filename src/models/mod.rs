//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`] - Node records from the lookup service
//! - [`RenderItem`] - Visible rows produced by the tree walker

mod node;
mod render;

pub use node::{Node, NodeKind};
pub use render::RenderItem;
