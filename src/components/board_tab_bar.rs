//! Board Tab Bar Component
//!
//! Tab bar for switching between boards, with an inline form to create one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::models::BoardType;
use crate::commands;
use crate::context::AppContext;
use crate::store::{store_add_board, use_app_store, AppStateStoreFields};

const BOARD_TYPES: &[(BoardType, &str)] = &[
    (BoardType::Public, "Public"),
    (BoardType::Private, "Private"),
];

/// Board Tab Bar component
#[component]
pub fn BoardTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());
    let (board_type, set_board_type) = signal(BoardType::Public);
    let (error, set_error) = signal(None::<String>);

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        let description = new_description.get().trim().to_string();
        if title.is_empty() { return; }
        let kind = board_type.get();

        spawn_local(async move {
            match commands::create_board(&title, &description, kind).await {
                Ok(board) => {
                    let id = board.id.clone();
                    store_add_board(&store, board);
                    ctx.open_board(id);
                    set_new_title.set(String::new());
                    set_new_description.set(String::new());
                    set_error.set(None);
                    set_adding.set(false);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="board-tab-bar">
            <For
                each=move || store.boards().get()
                key=|b| b.id.clone()
                children=move |b| {
                    let id = b.id.clone();
                    let is_active = {
                        let id = id.clone();
                        move || ctx.current_board.get().as_deref() == Some(id.as_str())
                    };
                    let tab_class = move || {
                        if is_active() { "board-tab active" } else { "board-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| ctx.open_board(id.clone())
                        >
                            {b.title.clone()}
                        </button>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Board title"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Description"
                            prop:value=move || new_description.get()
                            on:input=move |ev| set_new_description.set(event_target_value(&ev))
                        />
                        <select on:change=move |ev| set_board_type.set(BoardType::from_str(&event_target_value(&ev)))>
                            {BOARD_TYPES.iter().map(|(kind, label)| {
                                let kind = *kind;
                                view! {
                                    <option value=kind.as_str() selected=move || board_type.get() == kind>
                                        {*label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                        {move || error.get().map(|e| view! { <span class="form-error">{e}</span> })}
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="board-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
