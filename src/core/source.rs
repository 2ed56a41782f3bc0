//! Node lookup sources.
//!
//! A [`NodeSource`] is the only boundary between the tree and the outside
//! world: it resolves one identifier to one [`Node`].
//!
//! - [`HttpNodeSource`] - `GET {base_url}/{id}.json` through the Fetch API
//! - [`StaticNodeSource`] - in-memory node table (bundled demo data)

use std::collections::HashMap;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::core::error::{FetchError, LoadError};
use crate::models::Node;
use crate::utils::{delay, fetch_json};

/// Asynchronous node lookup by identifier.
///
/// Returned futures are `'static` so the loader can share one in-flight
/// request between every caller waiting on the same id.
pub trait NodeSource {
    fn fetch_node(&self, id: String) -> LocalBoxFuture<'static, Result<Node, LoadError>>;
}

// =============================================================================
// HTTP Source
// =============================================================================

/// Fetches node records from a static or dynamic HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpNodeSource {
    base_url: String,
}

impl HttpNodeSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the record for `id`.
    pub fn node_url(&self, id: &str) -> String {
        format!("{}/{}.json", self.base_url, id)
    }
}

impl NodeSource for HttpNodeSource {
    fn fetch_node(&self, id: String) -> LocalBoxFuture<'static, Result<Node, LoadError>> {
        let url = self.node_url(&id);
        async move {
            match fetch_json::<Node>(&url).await {
                Ok(node) => Ok(node),
                Err(FetchError::HttpError(404)) => Err(LoadError::NotFound(id)),
                Err(e) => Err(LoadError::Transport(e)),
            }
        }
        .boxed_local()
    }
}

// =============================================================================
// Static Source
// =============================================================================

/// In-memory node table.
///
/// Lookups resolve after an optional simulated latency (browser only).
#[derive(Clone, Debug, Default)]
pub struct StaticNodeSource {
    nodes: HashMap<String, Node>,
    latency_ms: u32,
}

impl StaticNodeSource {
    pub fn from_nodes<I: IntoIterator<Item = Node>>(nodes: I) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            latency_ms: 0,
        }
    }

    /// Parse a JSON array of node records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let nodes: Vec<Node> = serde_json::from_str(json)?;
        Ok(Self::from_nodes(nodes))
    }

    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl NodeSource for StaticNodeSource {
    fn fetch_node(&self, id: String) -> LocalBoxFuture<'static, Result<Node, LoadError>> {
        let result = self.nodes.get(&id).cloned().ok_or(LoadError::NotFound(id));
        let latency_ms = self.latency_ms;
        async move {
            if latency_ms > 0 {
                delay(latency_ms).await;
            }
            result
        }
        .boxed_local()
    }
}
