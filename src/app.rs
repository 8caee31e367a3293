//! Pros/Cons Frontend App
//!
//! Main application component: list tabs above either the active board or
//! the "create a new list" panel.

use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use pros_cons_core::ListStore;

use crate::click_outside::{self, WEIGHT_MENU_SELECTOR};
use crate::components::{CreateListButton, ListTabBar, ProsConsBoard};
use crate::config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let lists = if config.seed_sample_list {
        ListStore::with_sample(&config.sample_title)
    } else {
        ListStore::new()
    };
    info!("[APP] starting with {} list(s)", lists.lists().len());

    let store = Store::new(AppState::new(lists));
    provide_context(store);

    let (dismiss_trigger, set_dismiss_trigger) = signal(0u32);
    let ctx = AppContext::new((dismiss_trigger, set_dismiss_trigger), config);
    provide_context(ctx);

    click_outside::bind_global_mousedown(WEIGHT_MENU_SELECTOR, move || ctx.dismiss_menus());

    let active_id = Memo::new(move |_| store.lists().read().active_id());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <ListTabBar />

                {move || match active_id.get() {
                    Some(list_id) => view! { <ProsConsBoard list_id=list_id /> }.into_any(),
                    None => view! {
                        <div class="empty-state">
                            <h3>"Create a new list"</h3>
                            <CreateListButton button_class="create-list-btn large" />
                        </div>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
