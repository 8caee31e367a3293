//! Side Column Component
//!
//! One of the two columns (pros or cons) with its "+" button.

use leptos::prelude::*;

use pros_cons_core::{side_items, ItemId, ItemIntent, ListEditState, ProsConsItem, Side};

use crate::components::item_row::ItemRow;

#[component]
pub fn SideColumn(
    side: Side,
    items: Memo<Vec<ProsConsItem>>,
    edit: RwSignal<ListEditState>,
    #[prop(into)] on_intent: Callback<ItemIntent>,
) -> impl IntoView {
    // Keyed on id: a commit must not remount the row under the pointer
    let item_ids = move || {
        items.with(|items| side_items(items, side).map(|item| item.id).collect::<Vec<ItemId>>())
    };

    view! {
        <section class=format!("side-column {}", side.as_str())>
            <div class="column-header">
                <h2>{side.label()}</h2>
                <div class="column-labels">
                    <span>"Weight"</span>
                    <span>"Argument"</span>
                </div>
            </div>

            <For
                each=item_ids
                key=|id| *id
                children=move |id| view! {
                    <ItemRow item_id=id items=items edit=edit on_intent=on_intent />
                }
            />

            <button
                class="add-item-btn"
                title=format!("Add {} argument", side.as_str())
                on:click=move |_| on_intent.run(ItemIntent::Add { side })
            >
                "+"
            </button>
        </section>
    }
}
