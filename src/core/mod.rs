//! Core logic of the lazily loaded file tree.
//!
//! This module provides:
//! - [`NodeStore`] - append-only node cache
//! - [`ExpansionState`] - set of expanded directories
//! - [`Loader`] - cached, deduplicating async node lookup
//! - [`walker`] - pure projection of the tree into visible rows
//! - [`FileTree`] - the above wired together, plus the load-and-reproject loop

pub mod error;
mod expansion;
mod loader;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod source;
mod store;
mod tree;
pub mod walker;

pub use error::{FetchError, LoadError};
pub use expansion::ExpansionState;
pub use loader::{Failures, LoadResult, Loader};
pub use source::{HttpNodeSource, NodeSource, StaticNodeSource};
pub use store::NodeStore;
pub use tree::FileTree;
