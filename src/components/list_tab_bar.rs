//! List Tab Bar Component
//!
//! Tab bar for switching between lists above the board.

use leptos::prelude::*;

use pros_cons_core::ListId;

use crate::components::{CreateListButton, DeleteConfirmButton};
use crate::store::{store_delete_list, store_select_list, use_app_store, AppStateStoreFields};

/// List Tab Bar component
#[component]
pub fn ListTabBar() -> impl IntoView {
    let store = use_app_store();
    let active_id = Memo::new(move |_| store.lists().read().active_id());
    let tabs = Memo::new(move |_| {
        store.lists().read().lists().iter()
            .map(|list| (list.id, list.display_title().to_string()))
            .collect::<Vec<(ListId, String)>>()
    });

    view! {
        <div class="list-tab-bar">
            <For
                each=move || tabs.get()
                key=|tab| tab.clone()
                children=move |(id, title)| {
                    let is_active = move || active_id.get() == Some(id);
                    let tab_class = move || {
                        if is_active() { "list-tab active" } else { "list-tab" }
                    };

                    view! {
                        <div class=tab_class>
                            <button
                                class="list-tab-title"
                                on:click=move |_| store_select_list(&store, id)
                            >
                                {title}
                            </button>
                            <Show when=is_active>
                                <DeleteConfirmButton
                                    button_class="list-delete-btn"
                                    prompt="Delete list?"
                                    on_confirm=move |_| store_delete_list(&store, id)
                                />
                            </Show>
                        </div>
                    }
                }
            />

            <CreateListButton button_class="list-add-btn" />
        </div>
    }
}
