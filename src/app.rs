//! Root application module.
//!
//! Contains the main App component, the [`TreeContext`] shared with the tree
//! components, and the boot logic that loads the root node.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::FileTreeViewer;
use crate::config::{self, APP_NAME};
use crate::core::FileTree;
use crate::models::RenderItem;
use crate::utils::log;

// ============================================================================
// BootStatus
// ============================================================================

/// Progress of the initial root fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BootStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

// ============================================================================
// TreeContext
// ============================================================================

/// Reactive handle on the file tree.
///
/// The tree itself is not reactive; `revision` is bumped after every state
/// change (toggle, retry, load completion) and everything that reads the tree
/// tracks it.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles. The tree lives
/// in local storage since it holds `Rc`s and never leaves the main thread.
#[derive(Clone, Copy)]
pub struct TreeContext {
    pub tree: StoredValue<FileTree, LocalStorage>,
    pub revision: RwSignal<u64>,
    pub status: RwSignal<BootStatus>,
}

impl TreeContext {
    pub fn new(tree: FileTree) -> Self {
        Self {
            tree: StoredValue::new_local(tree),
            revision: RwSignal::new(0),
            status: RwSignal::new(BootStatus::Loading),
        }
    }

    /// Mark the tree as changed so views re-project it.
    pub fn refresh(&self) {
        self.revision.update(|r| *r = r.wrapping_add(1));
    }

    /// Current rows; tracks the revision.
    pub fn items(&self) -> Vec<RenderItem> {
        self.revision.track();
        self.tree.with_value(|tree| tree.items())
    }

    pub fn toggle(&self, id: &str) {
        if self.tree.with_value(|tree| tree.toggle(id)) {
            self.refresh();
        }
    }

    pub fn retry(&self, id: &str) {
        if self.tree.with_value(|tree| tree.retry(id)) {
            self.refresh();
        }
    }

    /// Start loads for the placeholders in `items` that are not already
    /// being fetched. Each completion triggers a refresh.
    pub fn schedule_loads(&self, items: &[RenderItem]) {
        let tree = self.tree.get_value();
        for id in tree.ids_to_load(items) {
            let load = tree.load(&id);
            let ctx = *self;
            spawn_local(async move {
                // Failures are recorded by the loader and shown as rows
                let _ = load.await;
                ctx.refresh();
            });
        }
    }

    /// Fetch the root node and expand it.
    pub fn boot(&self) {
        let tree = self.tree.get_value();
        let ctx = *self;
        spawn_local(async move {
            match tree.init().await {
                Ok(()) => {
                    log::info(&format!("loaded root node '{}'", tree.root_id()));
                    ctx.status.set(BootStatus::Ready);
                }
                Err(e) => {
                    log::warn(&format!("failed to load root node: {}", e));
                    ctx.status.set(BootStatus::Failed(e.to_string()));
                }
            }
            ctx.refresh();
        });
    }
}

/// Root application component.
///
/// This component:
/// - Builds the tree over the configured node source
/// - Creates and provides the TreeContext and starts the root fetch
/// - Renders the tree viewer, which also shows a failed boot
#[component]
pub fn App() -> impl IntoView {
    let ctx = TreeContext::new(FileTree::new(config::node_source()));
    provide_context(ctx);
    ctx.boot();

    view! {
        <main class="app">
            <section class="panel">
                <h1 class="panel-title">{APP_NAME}</h1>
                <FileTreeViewer />
            </section>
        </main>
    }
}
