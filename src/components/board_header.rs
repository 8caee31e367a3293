//! Board Header Component
//!
//! List title, last-updated time and the Share / Close affordances.

use chrono::Local;
use leptos::prelude::*;
use log::{info, warn};

use pros_cons_core::ProsConsList;

use crate::hooks;

fn run_hook(name: &str, list: Option<ProsConsList>, hook: fn(&ProsConsList) -> Result<bool, String>) {
    let Some(list) = list else { return };
    match hook(&list) {
        Ok(true) => info!("[HEADER] {} handled list {}", name, list.id),
        Ok(false) => {}
        Err(e) => warn!("[HEADER] {} failed: {}", name, e),
    }
}

#[component]
pub fn BoardHeader(list: Memo<Option<ProsConsList>>) -> impl IntoView {
    let title = move || {
        list.with(|list| list.as_ref().map(|l| l.display_title().to_string()).unwrap_or_default())
    };
    let updated = move || {
        list.with(|list| list.as_ref().map(|l| {
            format!("Updated {}", l.updated_at.with_timezone(&Local).format("%H:%M:%S"))
        }))
    };

    view! {
        <header class="board-header">
            <div class="board-heading">
                <h1 class="board-title">{title}</h1>
                <span class="board-updated">{updated}</span>
            </div>
            <div class="board-actions">
                <button
                    class="board-btn share"
                    title="Share"
                    on:click=move |_| run_hook("share", list.get_untracked(), hooks::share)
                >
                    "Share"
                </button>
                <button
                    class="board-btn close"
                    title="Close"
                    on:click=move |_| run_hook("close", list.get_untracked(), hooks::close)
                >
                    "✕"
                </button>
            </div>
        </header>
    }
}
