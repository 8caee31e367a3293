//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The lists
//! themselves are a plain `ListStore`; these helpers are the only writers.

use leptos::prelude::*;
use log::debug;
use reactive_stores::Store;

use pros_cons_core::{ItemIntent, ListId, ListStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every list plus the active selection
    pub lists: ListStore,
}

impl AppState {
    pub fn new(lists: ListStore) -> Self {
        Self { lists }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Create a list and make it active
pub fn store_create_list(store: &AppStore, title: &str) -> ListId {
    store.lists().write().create(title)
}

pub fn store_select_list(store: &AppStore, list_id: ListId) {
    if let Err(e) = store.lists().write().select(list_id) {
        debug!("[STORE] select ignored: {}", e);
    }
}

pub fn store_delete_list(store: &AppStore, list_id: ListId) {
    if let Err(e) = store.lists().write().delete(list_id) {
        debug!("[STORE] delete ignored: {}", e);
    }
}

/// Apply an item intent to one list. Rejected intents (blank text, stale
/// ids) leave the list untouched and return false.
pub fn store_apply(store: &AppStore, list_id: ListId, intent: ItemIntent) -> bool {
    match store.lists().write().apply(list_id, intent) {
        Ok(_) => true,
        Err(e) => {
            debug!("[STORE] intent ignored: {}", e);
            false
        }
    }
}
