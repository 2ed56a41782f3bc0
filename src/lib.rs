//! Lazily loaded file tree viewer.
//!
//! Directory children are fetched from a [`NodeSource`](crate::core::NodeSource)
//! only when their parent is expanded, cached for the rest of the session,
//! and deduplicated while in flight.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
