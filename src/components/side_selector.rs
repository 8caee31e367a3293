//! Side Selector Component
//!
//! Pro/Con toggle buttons for the detailed add form.

use leptos::prelude::*;
use pros_cons_core::Side;

pub const SIDES: [Side; 2] = [Side::Pro, Side::Con];

#[component]
pub fn SideSelector(
    current: ReadSignal<Side>,
    #[prop(into)] on_change: Callback<Side>,
) -> impl IntoView {
    view! {
        <div class="side-selector">
            {SIDES.iter().map(|side| {
                let side = *side;
                let is_selected = move || current.get() == side;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("side-btn {} active", side.as_str())
                        } else {
                            format!("side-btn {}", side.as_str())
                        }
                        on:click=move |_| on_change.run(side)
                    >
                        {side.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
