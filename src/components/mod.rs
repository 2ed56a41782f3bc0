//! UI components built with Leptos.
//!
//! - [`FileTreeViewer`] - Expandable file tree
//! - [`icons`] - Centralized icon definitions

mod file_tree;
pub mod icons;

pub use file_tree::FileTreeViewer;
