//! Cached, deduplicating node loader.
//!
//! [`Loader::ensure`] resolves an id from the [`NodeStore`] when cached,
//! joins an in-flight request when one exists, and otherwise issues exactly
//! one call to the [`NodeSource`]. Successful results are written to the
//! store; failures are recorded per id so the walker can show them without
//! re-requesting.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::{self, FutureExt, LocalBoxFuture, Shared};

use crate::core::error::LoadError;
use crate::core::source::NodeSource;
use crate::core::store::NodeStore;
use crate::models::Node;
use crate::utils::log;

/// Result of a node lookup, as seen by every waiter.
pub type LoadResult = Result<Node, LoadError>;

/// Recorded lookup failures, keyed by id.
pub type Failures = HashMap<String, LoadError>;

type PendingLoad = Shared<LocalBoxFuture<'static, LoadResult>>;

/// Async accessor over a [`NodeSource`] with caching and request
/// deduplication.
///
/// Cloning is cheap; clones share the same store, in-flight map, and
/// failure log.
#[derive(Clone)]
pub struct Loader {
    source: Rc<dyn NodeSource>,
    store: Rc<RefCell<NodeStore>>,
    in_flight: Rc<RefCell<HashMap<String, PendingLoad>>>,
    failures: Rc<RefCell<Failures>>,
}

impl Loader {
    pub fn new(source: Rc<dyn NodeSource>, store: Rc<RefCell<NodeStore>>) -> Self {
        Self {
            source,
            store,
            in_flight: Rc::new(RefCell::new(HashMap::new())),
            failures: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Resolve `id` to its node.
    ///
    /// The in-flight entry is registered when this is called, not when the
    /// returned future is first polled, so several calls made back to back
    /// share one source request.
    pub fn ensure(&self, id: &str) -> LocalBoxFuture<'static, LoadResult> {
        if let Some(node) = self.store.borrow().get(id) {
            return future::ready(Ok(node.clone())).boxed_local();
        }

        if let Some(pending) = self.in_flight.borrow().get(id) {
            return pending.clone().boxed_local();
        }

        let pending = self.fetch(id.to_string()).shared();
        self.in_flight
            .borrow_mut()
            .insert(id.to_string(), pending.clone());
        pending.boxed_local()
    }

    /// Check if a request for `id` is currently in flight.
    pub fn is_pending(&self, id: &str) -> bool {
        self.in_flight.borrow().contains_key(id)
    }

    /// Recorded failure for `id`, if its last lookup failed.
    pub fn failure(&self, id: &str) -> Option<LoadError> {
        self.failures.borrow().get(id).cloned()
    }

    pub fn failures(&self) -> Ref<'_, Failures> {
        self.failures.borrow()
    }

    /// Drop the recorded failure for `id` so it is requested again the next
    /// time it becomes visible. Returns whether a failure was recorded.
    pub fn forget_failure(&self, id: &str) -> bool {
        self.failures.borrow_mut().remove(id).is_some()
    }

    fn fetch(&self, id: String) -> LocalBoxFuture<'static, LoadResult> {
        let request = self.source.fetch_node(id.clone());
        let store = Rc::clone(&self.store);
        let in_flight = Rc::clone(&self.in_flight);
        let failures = Rc::clone(&self.failures);

        async move {
            let result = request.await;
            in_flight.borrow_mut().remove(&id);

            match &result {
                Ok(node) => {
                    if node.id != id {
                        log::warn(&format!(
                            "node '{}' returned under id '{}', caching as '{}'",
                            id, node.id, id
                        ));
                    }
                    failures.borrow_mut().remove(&id);
                    store.borrow_mut().put(&id, node.clone());
                }
                Err(e) => {
                    log::warn(&format!("failed to load node '{}': {}", id, e));
                    failures.borrow_mut().insert(id.clone(), e.clone());
                }
            }

            result
        }
        .boxed_local()
    }
}
