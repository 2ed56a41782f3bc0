//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Demo data is loaded at compile time using `include_str!`.

use std::rc::Rc;

use crate::core::{HttpNodeSource, NodeSource, StaticNodeSource};
use crate::utils::log;

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown above the tree.
pub const APP_NAME: &str = "File Tree Viewer";

// =============================================================================
// Node Source Configuration
// =============================================================================

/// Identifier of the node fetched at startup.
pub const ROOT_NODE_ID: &str = "root";

/// Serve nodes from the bundled demo table instead of the HTTP endpoint.
pub const USE_STATIC_SOURCE: bool = true;

/// Base URL of the node lookup endpoint (`{base}/{id}.json`).
pub const NODE_API_BASE_URL: &str = "/api/inodes";

/// Simulated lookup latency for the bundled demo table, in milliseconds.
pub const STATIC_SOURCE_LATENCY_MS: u32 = 400;

/// Bundled demo nodes (JSON array of node records).
pub const DEMO_NODES_JSON: &str = include_str!("../assets/nodes.json");

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Layout
// =============================================================================

/// Indentation per nesting level, in rem.
pub const INDENT_REM: f32 = 1.5;

/// Build the configured node source.
///
/// Falls back to the HTTP endpoint if the bundled table fails to parse.
pub fn node_source() -> Rc<dyn NodeSource> {
    if USE_STATIC_SOURCE {
        match StaticNodeSource::from_json(DEMO_NODES_JSON) {
            Ok(source) => return Rc::new(source.with_latency(STATIC_SOURCE_LATENCY_MS)),
            Err(e) => log::warn(&format!("bundled demo nodes are invalid: {}", e)),
        }
    }
    Rc::new(HttpNodeSource::new(NODE_API_BASE_URL))
}
