//! Pros/Cons Board Component
//!
//! The active list: header, pro and con columns, detailed add form and the
//! result panel. Edit-mode state lives here, one per mounted board.

use leptos::prelude::*;

use pros_cons_core::{ItemIntent, ListEditState, ListId, Side, Tally};

use crate::components::add_item_form::AddItemForm;
use crate::components::board_header::BoardHeader;
use crate::components::score_panel::ScorePanel;
use crate::components::side_column::SideColumn;
use crate::context::use_app_context;
use crate::store::{store_apply, use_app_store, AppStateStoreFields};

#[component]
pub fn ProsConsBoard(list_id: ListId) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let edit = RwSignal::new(ListEditState::new());
    let (adding, set_adding) = signal(false);

    let list = Memo::new(move |_| store.lists().read().get(list_id).cloned());
    let items = Memo::new(move |_| {
        list.with(|list| list.as_ref().map(|l| l.items.clone()).unwrap_or_default())
    });
    let tally = Memo::new(move |_| items.with(|items| Tally::from_items(items)));

    // Outside pointer-down closes the open weight menu without committing
    Effect::new(move |_| {
        let _ = ctx.dismiss_trigger.get();
        edit.update(|state| state.dismiss_weight());
    });

    let on_intent = Callback::new(move |intent: ItemIntent| {
        let deleting = matches!(intent, ItemIntent::Delete { .. });
        if store_apply(&store, list_id, intent) && deleting {
            let remaining = store.lists().read().get(list_id)
                .map(|l| l.items.clone())
                .unwrap_or_default();
            edit.update(|state| state.forget_missing(&remaining));
        }
    });

    view! {
        <div class="pros-cons-board">
            <BoardHeader list=list />

            <div class="board-columns">
                <SideColumn side=Side::Pro items=items edit=edit on_intent=on_intent />
                <SideColumn side=Side::Con items=items edit=edit on_intent=on_intent />
            </div>

            <Show
                when=move || adding.get()
                fallback=move || view! {
                    <button class="add-custom-btn" on:click=move |_| set_adding.set(true)>
                        "+ Add a detailed argument"
                    </button>
                }
            >
                <AddItemForm
                    default_weight=ctx.default_weight()
                    on_add=move |intent: ItemIntent| {
                        on_intent.run(intent);
                        set_adding.set(false);
                    }
                    on_cancel=move |_| set_adding.set(false)
                />
            </Show>

            <ScorePanel tally=tally />
        </div>
    }
}
