//! Add Item Form Component
//!
//! Form for adding an argument with its own text, weight and side, instead
//! of the column "+" placeholder.

use leptos::prelude::*;

use pros_cons_core::{ItemIntent, Side, Weight};

use crate::components::side_selector::SideSelector;

#[component]
pub fn AddItemForm(
    default_weight: Weight,
    #[prop(into)] on_add: Callback<ItemIntent>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (weight, set_weight) = signal(default_weight);
    let (side, set_side) = signal(Side::Pro);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get();
        if value.trim().is_empty() { return; }

        on_add.run(ItemIntent::AddWith {
            text: value,
            weight: weight.get(),
            side: side.get(),
        });
        set_text.set(String::new());
        set_weight.set(default_weight);
        set_side.set(Side::Pro);
    };

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <label class="editor-label">"Description"</label>
            <textarea
                rows="3"
                placeholder="Enter your pro or con..."
                autofocus
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_cancel.run(());
                    }
                }
            ></textarea>

            <div class="add-item-row">
                <label class="editor-label">"Weight"</label>
                <select
                    prop:value=move || weight.get().value().to_string()
                    on:change=move |ev| {
                        let parsed = event_target_value(&ev).parse::<u8>().ok()
                            .and_then(|n| Weight::try_from_u8(n).ok());
                        if let Some(w) = parsed {
                            set_weight.set(w);
                        }
                    }
                >
                    {Weight::ALL.iter().map(|w| {
                        let value = w.value().to_string();
                        view! { <option value=value.clone()>{value.clone()}</option> }
                    }).collect_view()}
                </select>

                <SideSelector current=side on_change=move |s: Side| set_side.set(s) />
            </div>

            <div class="add-item-actions">
                <button
                    type="submit"
                    class="confirm-btn"
                    prop:disabled=move || text.get().trim().is_empty()
                >
                    "✓ Add"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>"✗ Cancel"</button>
            </div>
        </form>
    }
}
