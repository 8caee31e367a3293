//! Create List Button Component
//!
//! "+" button that expands into a title form.

use leptos::prelude::*;

use crate::store::{store_create_list, use_app_store};

#[component]
pub fn CreateListButton(
    /// CSS class for the collapsed button
    #[prop(into)] button_class: String,
) -> impl IntoView {
    let store = use_app_store();
    let (creating, set_creating) = signal(false);
    let (title, set_title) = signal(String::new());

    let cancel = move || {
        set_title.set(String::new());
        set_creating.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = title.get();
        let value = value.trim();
        if value.is_empty() { return; }

        store_create_list(&store, value);
        cancel();
    };

    view! {
        {move || if creating.get() {
            view! {
                <form class="create-list-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Enter list title..."
                        autofocus
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                cancel();
                            }
                        }
                    />
                    <button
                        type="submit"
                        class="confirm-btn"
                        prop:disabled=move || title.get().trim().is_empty()
                    >
                        "✓ Create"
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| cancel()>"✗ Cancel"</button>
                </form>
            }.into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title="Create new list"
                    on:click=move |_| set_creating.set(true)
                >
                    "+"
                </button>
            }.into_any()
        }}
    }
}
