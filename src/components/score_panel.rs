//! Score Panel Component
//!
//! Result bars: each side's share of the total weight plus its points.

use leptos::prelude::*;

use pros_cons_core::{LabelPlacement, Side, Tally};

fn verdict(tally: &Tally) -> &'static str {
    if tally.total == 0 {
        return "Add some arguments to see the result";
    }
    match tally.leader() {
        Some(Side::Pro) => "The pros outweigh the cons",
        Some(Side::Con) => "The cons outweigh the pros",
        None => "It's a tie",
    }
}

#[component]
pub fn ScorePanel(tally: Memo<Tally>) -> impl IntoView {
    view! {
        <section class="score-panel">
            <div class="score-header">
                <div>"Name"</div>
                <div>"Percentage"</div>
                <div>"Points"</div>
            </div>
            <ScoreRow side=Side::Pro tally=tally />
            <ScoreRow side=Side::Con tally=tally />
            <p class="score-verdict">{move || tally.with(verdict)}</p>
        </section>
    }
}

#[component]
fn ScoreRow(side: Side, tally: Memo<Tally>) -> impl IntoView {
    let percentage = Memo::new(move |_| tally.get().percentage(side));
    let placement = Memo::new(move |_| LabelPlacement::for_percentage(percentage.get()));

    view! {
        <div class=format!("score-row {}", side.as_str())>
            <div class="score-name">{side.label()}</div>
            <div class="score-bar-track">
                <div class="score-bar-fill" style=move || format!("width: {}%;", percentage.get())>
                    {move || (placement.get() == LabelPlacement::Inside)
                        .then(|| format!("{} %", percentage.get()))}
                </div>
                {move || (placement.get() == LabelPlacement::Outside).then(|| view! {
                    <span class="score-bar-outside">{format!("{} %", percentage.get())}</span>
                })}
            </div>
            <div class="score-points">{move || tally.get().score(side)}</div>
        </div>
    }
}
