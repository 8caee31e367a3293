//! Item Row Component
//!
//! One argument in a column: click the text to edit it, click the weight
//! chip to pick a new weight.

use leptos::prelude::*;

use pros_cons_core::{ItemId, ItemIntent, ListEditState, ProsConsItem, Weight};

use crate::components::weight_picker::WeightPicker;

/// A single argument row
#[component]
pub fn ItemRow(
    item_id: ItemId,
    items: Memo<Vec<ProsConsItem>>,
    edit: RwSignal<ListEditState>,
    #[prop(into)] on_intent: Callback<ItemIntent>,
) -> impl IntoView {
    let id = item_id;
    let item = Memo::new(move |_| items.with(|items| items.iter().find(|item| item.id == id).cloned()));
    let text = move || item.with(|item| item.as_ref().map(|i| i.text.clone()).unwrap_or_default());
    let weight = Memo::new(move |_| item.with(|item| item.as_ref().map(|i| i.weight).unwrap_or_default()));
    let side_class = item.with_untracked(|item| item.as_ref().map(|i| i.side.as_str()).unwrap_or_default());

    // Memos so typing in the draft does not rebuild the input
    let editing_text = Memo::new(move |_| edit.with(|state| state.is_editing_text(id)));
    let editing_weight = Memo::new(move |_| edit.with(|state| state.is_editing_weight(id)));
    let menu_open = Memo::new(move |_| edit.with(|state| state.is_menu_open(id)));
    let shown_weight = Memo::new(move |_| {
        edit.with(|state| state.weight.filter(|w| w.item_id == id).map(|w| w.shown))
            .unwrap_or_else(|| weight.get())
    });

    let commit = move |intent: Option<ItemIntent>| {
        if let Some(intent) = intent {
            on_intent.run(intent);
        }
    };

    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let text_view = move || {
        if editing_text.get() {
            view! {
                <input
                    node_ref=input_ref
                    type="text"
                    class="item-text-input"
                    prop:value=move || edit.with(|state| state.draft().unwrap_or_default().to_string())
                    on:input=move |ev| {
                        let draft = event_target_value(&ev);
                        edit.update(|state| state.set_draft(draft));
                    }
                    on:blur=move |_| commit(edit.try_update(|state| state.blur_text()).flatten())
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                commit(edit.try_update(|state| state.commit_text()).flatten());
                            }
                            "Escape" => edit.update(|state| state.cancel_text()),
                            _ => {}
                        }
                    }
                />
            }.into_any()
        } else {
            view! {
                <span
                    class="item-text"
                    title="Click to edit"
                    on:click=move |_| {
                        if let Some(item) = item.get_untracked() {
                            commit(edit.try_update(|state| state.begin_text(&item)).flatten());
                        }
                    }
                >
                    {text}
                </span>
            }.into_any()
        }
    };

    let on_chip_click = move |_| {
        if editing_weight.get_untracked() {
            edit.update(|state| state.toggle_weight_menu());
        } else if let Some(item) = item.get_untracked() {
            edit.update(|state| state.open_weight(&item));
        }
    };

    view! {
        <div class=format!("item-row {}", side_class)>
            <div class="weight-dropdown">
                <button
                    type="button"
                    class=move || if editing_weight.get() { "weight-chip editing" } else { "weight-chip" }
                    title="Change weight"
                    on:click=on_chip_click
                >
                    {move || shown_weight.get().value()}
                    <span class="chevron">"▾"</span>
                </button>
                <Show when=move || menu_open.get()>
                    <WeightPicker
                        current=shown_weight.get_untracked()
                        on_select=move |w: Weight| commit(edit.try_update(|state| state.select_weight(w)).flatten())
                    />
                </Show>
            </div>

            <div class="item-body">
                {text_view}
                <span class="weight-dots">
                    {Weight::ALL.iter().map(|w| {
                        let w = *w;
                        let class = move || if w <= weight.get() { "weight-dot filled" } else { "weight-dot" };
                        view! { <span class=class></span> }
                    }).collect_view()}
                </span>
            </div>

            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| on_intent.run(ItemIntent::Delete { id })
            >
                "×"
            </button>
        </div>
    }
}
