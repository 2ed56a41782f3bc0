use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::{LocalBoxFuture, join_all};

use crate::config::ROOT_NODE_ID;
use crate::core::error::LoadError;
use crate::core::expansion::ExpansionState;
use crate::core::loader::{LoadResult, Loader};
use crate::core::source::NodeSource;
use crate::core::store::NodeStore;
use crate::core::walker;
use crate::models::RenderItem;

/// A lazily loaded tree: node cache, expansion set, and loader, rooted at a
/// single id.
///
/// Rendering is split in two steps. [`items`](Self::items) projects the
/// current state into rows without side effects; whoever drives the view
/// then loads every id returned by [`ids_to_load`](Self::ids_to_load) and projects again
/// once a load completes. [`resolve_visible`](Self::resolve_visible) runs
/// that loop to completion.
///
/// Cloning is cheap; clones share all state.
#[derive(Clone)]
pub struct FileTree {
    root_id: String,
    store: Rc<RefCell<NodeStore>>,
    expansion: Rc<RefCell<ExpansionState>>,
    loader: Loader,
}

impl FileTree {
    /// Create a tree rooted at [`ROOT_NODE_ID`].
    pub fn new(source: Rc<dyn NodeSource>) -> Self {
        Self::with_root(source, ROOT_NODE_ID)
    }

    pub fn with_root(source: Rc<dyn NodeSource>, root_id: &str) -> Self {
        let store = Rc::new(RefCell::new(NodeStore::new()));
        Self {
            root_id: root_id.to_string(),
            loader: Loader::new(source, Rc::clone(&store)),
            store,
            expansion: Rc::new(RefCell::new(ExpansionState::new())),
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Fetch the root node and mark it expanded if it is a directory.
    pub async fn init(&self) -> Result<(), LoadError> {
        let root = self.loader.ensure(&self.root_id).await?;

        let mut expansion = self.expansion.borrow_mut();
        if root.is_directory() && !expansion.is_expanded(&self.root_id) {
            expansion.toggle(&self.root_id);
        }
        Ok(())
    }

    /// Check if the root has been loaded.
    pub fn is_ready(&self) -> bool {
        self.store.borrow().contains(&self.root_id)
    }

    /// Toggle a cached directory open or closed.
    ///
    /// Returns `false` without changing anything when `id` is not a cached
    /// directory. In-flight loads under a directory being closed still
    /// complete and stay cached.
    pub fn toggle(&self, id: &str) -> bool {
        let is_directory = self
            .store
            .borrow()
            .get(id)
            .is_some_and(|node| node.is_directory());
        if is_directory {
            self.expansion.borrow_mut().toggle(id);
        }
        is_directory
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.borrow().is_expanded(id)
    }

    /// Current visible rows, placeholders included.
    pub fn items(&self) -> Vec<RenderItem> {
        walker::visible_sequence(
            &self.store.borrow(),
            &self.expansion.borrow(),
            &self.loader.failures(),
            &self.root_id,
        )
    }

    /// Load one node through the deduplicating loader.
    pub fn load(&self, id: &str) -> LocalBoxFuture<'static, LoadResult> {
        self.loader.ensure(id)
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Placeholder ids in `items` that still need a load.
    ///
    /// Ids already in flight or with a recorded failure are left out, so a
    /// view that re-projects while fetches are outstanding never starts a
    /// second request for the same id.
    pub fn ids_to_load(&self, items: &[RenderItem]) -> Vec<String> {
        walker::unresolved(items)
            .into_iter()
            .filter(|id| !self.loader.is_pending(id) && self.loader.failure(id).is_none())
            .collect()
    }

    /// Clear the failure recorded for `id` so it shows as a placeholder and
    /// gets requested again.
    pub fn retry(&self, id: &str) -> bool {
        self.loader.forget_failure(id)
    }

    /// Load placeholders until none remain and return the final rows.
    ///
    /// Each round loads every placeholder of the current projection
    /// concurrently. Failed ids become [`RenderItem::Failed`] rows and are
    /// not requested again, so the loop ends once the visible part of the
    /// tree is exhausted.
    pub async fn resolve_visible(&self) -> Vec<RenderItem> {
        loop {
            let items = self.items();
            let pending = walker::unresolved(&items);
            if pending.is_empty() {
                return items;
            }
            join_all(pending.iter().map(|id| self.loader.ensure(id))).await;
        }
    }
}
