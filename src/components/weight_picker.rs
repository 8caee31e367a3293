//! Weight Picker Component
//!
//! The five-value menu shown under an item's weight chip.

use leptos::prelude::*;
use pros_cons_core::Weight;

#[component]
pub fn WeightPicker(
    current: Weight,
    #[prop(into)] on_select: Callback<Weight>,
) -> impl IntoView {
    view! {
        <div class="weight-menu" role="listbox">
            {Weight::ALL.iter().map(|weight| {
                let weight = *weight;
                view! {
                    <div
                        class=if weight == current { "weight-option active" } else { "weight-option" }
                        role="option"
                        on:click=move |_| on_select.run(weight)
                    >
                        {weight.value()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
