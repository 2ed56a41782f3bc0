//! File tree component.
//!
//! Renders the rows projected by [`FileTree::items`](crate::core::FileTree::items)
//! and keeps loading placeholders until the visible part of the tree is
//! resolved.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{BootStatus, TreeContext};
use crate::components::icons as ic;
use crate::config::INDENT_REM;
use crate::models::RenderItem;

#[component]
pub fn FileTreeViewer() -> impl IntoView {
    let ctx = use_context::<TreeContext>().expect("TreeContext must be provided");

    let items = Memo::new(move |_| ctx.items());

    // Every projection that still has placeholders schedules their loads;
    // each completion bumps the revision and re-runs this.
    Effect::new(move |_| {
        items.with(|items| ctx.schedule_loads(items));
    });

    let status = move || match ctx.status.get() {
        BootStatus::Loading => Some(view! { <p class="tree-status">"Loading..."</p> }.into_any()),
        BootStatus::Failed(message) => Some(
            view! { <p class="tree-status tree-error">{format!("Could not load tree: {}", message)}</p> }
                .into_any(),
        ),
        BootStatus::Ready => None,
    };

    view! {
        <div class="tree" role="tree" aria-label="File tree">
            {status}
            // A child declared twice yields two equal rows; the position
            // keeps their keys distinct.
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(index, item)| (*index, item.clone())
                children=move |(_, item)| {
                    view! { <TreeRow item=item /> }
                }
            />
        </div>
    }
}

#[component]
fn TreeRow(item: RenderItem) -> impl IntoView {
    let ctx = use_context::<TreeContext>().expect("TreeContext must be provided");

    let indent = format!("padding-left: {}rem", item.depth() as f32 * INDENT_REM);

    match item {
        RenderItem::File { name, .. } => view! {
            <div class="tree-row" role="treeitem" style=indent>
                <span class="tree-chevron" aria-hidden="true"></span>
                <span class="tree-icon" aria-hidden="true"><Icon icon=ic::FILE /></span>
                <span class="tree-name">{name}</span>
            </div>
        }
        .into_any(),
        RenderItem::Directory { id, name, is_open, .. } => {
            let (chevron, folder) = if is_open {
                (ic::CHEVRON_DOWN, ic::FOLDER_OPEN)
            } else {
                (ic::CHEVRON_RIGHT, ic::FOLDER)
            };
            let handle_click = move |_: leptos::ev::MouseEvent| ctx.toggle(&id);

            view! {
                <div
                    class="tree-row tree-dir"
                    role="treeitem"
                    aria-expanded=is_open.to_string()
                    style=indent
                    on:click=handle_click
                >
                    <span class="tree-chevron" aria-hidden="true"><Icon icon=chevron /></span>
                    <span class="tree-icon" aria-hidden="true"><Icon icon=folder /></span>
                    <span class="tree-name">{name}</span>
                </div>
            }
            .into_any()
        }
        RenderItem::Placeholder { .. } => view! {
            <div class="tree-row tree-pending" role="treeitem" aria-busy="true" style=indent>
                <span class="tree-chevron" aria-hidden="true"></span>
                <span class="tree-icon tree-spin" aria-hidden="true"><Icon icon=ic::LOADING /></span>
                <span class="tree-name">"Loading..."</span>
            </div>
        }
        .into_any(),
        RenderItem::Failed { id, message, .. } => {
            let handle_retry = move |_: leptos::ev::MouseEvent| ctx.retry(&id);
            let title = message.clone();

            view! {
                <div class="tree-row tree-error" role="treeitem" style=indent title=title>
                    <span class="tree-chevron" aria-hidden="true"></span>
                    <span class="tree-icon" aria-hidden="true"><Icon icon=ic::ERROR /></span>
                    <span class="tree-name">{message}</span>
                    <button class="tree-retry" aria-label="Retry" on:click=handle_retry>
                        <Icon icon=ic::RETRY />
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
