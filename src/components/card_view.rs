//! Card View Component

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::models::Card;

/// A single card. Placeholders render as an invisible drop slot.
///
/// The `data-droppable-id` attribute must match `dnd::DROPPABLE_ATTR`.
#[component]
pub fn CardView(card: Card) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();

    if card.placeholder {
        return view! {
            <div class="card card-placeholder" data-droppable-id=card.id.clone()></div>
        }
        .into_any();
    }

    let id = card.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let card_class = move || {
        if dnd.is_dragging(&id) { "card dragging" } else { "card" }
    };

    view! {
        <div
            class=card_class
            data-droppable-id=card.id.clone()
            on:mousedown=on_mousedown
        >
            <div class="card-title">{card.title.clone()}</div>
            {card.description.clone().map(|d| view! { <div class="card-description">{d}</div> })}
        </div>
    }
    .into_any()
}
