//! Delete Confirm Button Component
//!
//! Two-step delete: a × button that turns into an inline "Delete?" prompt.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `prompt` - question shown while confirming, e.g. "Delete list?"
/// * `on_confirm` - runs once the user clicks ✓
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    // Clicks stay inside so the surrounding tab is not selected
    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        set_confirming.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    move || if confirming.get() {
        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=move |ev| answer(ev, true)>"✓"</button>
                <button class="cancel-btn" on:click=move |ev| answer(ev, false)>"✗"</button>
            </span>
        }.into_any()
    } else {
        view! {
            <button
                class=button_class.clone()
                title=prompt.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "×"
            </button>
        }.into_any()
    }
}
