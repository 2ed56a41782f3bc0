//! Recording node source for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::core::error::LoadError;
use crate::core::source::NodeSource;
use crate::models::Node;

/// In-memory source that records every lookup and can be told to fail.
///
/// Clones share the call log and failure table, so a test can hand one clone
/// to the loader and inspect the other.
#[derive(Clone, Default)]
pub struct MockSource {
    nodes: HashMap<String, Node>,
    failures: Rc<RefCell<HashMap<String, LoadError>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl MockSource {
    pub fn new<I: IntoIterator<Item = Node>>(nodes: I) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
            ..Default::default()
        }
    }

    /// Serve `node` for lookups of `id`, whatever the node's own id.
    pub fn with_record(mut self, id: &str, node: Node) -> Self {
        self.nodes.insert(id.to_string(), node);
        self
    }

    /// Make lookups of `id` fail with `error` until [`recover`](Self::recover).
    pub fn failing(self, id: &str, error: LoadError) -> Self {
        self.failures.borrow_mut().insert(id.to_string(), error);
        self
    }

    pub fn recover(&self, id: &str) {
        self.failures.borrow_mut().remove(id);
    }

    /// Every id requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn fetch_count(&self, id: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == id).count()
    }
}

impl NodeSource for MockSource {
    fn fetch_node(&self, id: String) -> LocalBoxFuture<'static, Result<Node, LoadError>> {
        self.calls.borrow_mut().push(id.clone());

        let result = match self.failures.borrow().get(&id) {
            Some(error) => Err(error.clone()),
            None => self.nodes.get(&id).cloned().ok_or(LoadError::NotFound(id)),
        };
        async move { result }.boxed_local()
    }
}
