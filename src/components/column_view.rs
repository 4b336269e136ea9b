//! Column View Component
//!
//! Column header (drag handle, rename, delete), card list and new card form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::commands;
use crate::components::{CardView, DeleteConfirmButton, NewCardForm};
use crate::context::AppContext;
use crate::models::Column;
use crate::store::{store_remove_column, store_rename_column, use_app_store};

#[component]
pub fn ColumnView(column: Column) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = column.id.clone();
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let column_class = {
        let id = id.clone();
        move || if dnd.is_dragging(&id) { "column dragging" } else { "column" }
    };

    let on_rename = {
        let id = id.clone();
        let original = column.title.clone();
        move |ev: web_sys::Event| {
            let title = event_target_value(&ev);
            let title = title.trim().to_string();
            if title.is_empty() || title == original {
                return;
            }
            let id = id.clone();
            spawn_local(async move {
                match commands::rename_column(&id, &title).await {
                    Ok(_) => store_rename_column(&store, &id, &title),
                    Err(e) => {
                        web_sys::console::log_1(&format!("[BOARD] Rename failed: {}", e).into());
                        ctx.reload();
                    }
                }
            });
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_: ()| {
            let id = id.clone();
            store_remove_column(&store, &id);
            spawn_local(async move {
                if let Err(e) = commands::delete_column(&id).await {
                    web_sys::console::log_1(&format!("[BOARD] Delete failed: {}", e).into());
                    ctx.reload();
                }
            });
        }
    };

    let card_count = column.cards.iter().filter(|c| !c.placeholder).count();
    let cards = column.cards.clone();

    view! {
        <div class=column_class data-droppable-id=id.clone()>
            <div class="column-header" on:mousedown=on_mousedown>
                <input
                    class="column-title"
                    type="text"
                    value=column.title.clone()
                    on:change=on_rename
                />
                <span class="column-count">{card_count}</span>
                <DeleteConfirmButton
                    button_class="column-delete-btn"
                    prompt="Delete column and its cards?"
                    on_confirm=on_delete
                />
            </div>
            <div class="column-cards">
                {cards.into_iter().map(|card| view! { <CardView card=card /> }).collect_view()}
            </div>
            <NewCardForm board_id=column.board_id.clone() column_id=id.clone() />
        </div>
    }
}
