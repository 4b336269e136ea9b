//! New Card Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_add_card, use_app_store};

/// Form at the bottom of a column
#[component]
pub fn NewCardForm(board_id: String, column_id: String) -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() {
            set_error.set(Some("Please enter card title".to_string()));
            return;
        }
        let board_id = board_id.clone();
        let column_id = column_id.clone();

        spawn_local(async move {
            match commands::create_card(&board_id, &column_id, &text).await {
                Ok(card) => {
                    store_add_card(&store, card);
                    set_title.set(String::new());
                    set_error.set(None);
                    set_open.set(false);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="new-card">
            {move || if open.get() {
                view! {
                    <form class="new-card-form" on:submit=submit.clone()>
                        <input
                            type="text"
                            placeholder="Enter card title..."
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                        <button type="submit">"Add"</button>
                        <button type="button" on:click=move |_| set_open.set(false)>"×"</button>
                        {move || error.get().map(|e| view! { <span class="form-error">{e}</span> })}
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="new-card-btn" on:click=move |_| set_open.set(true)>
                        "+ Add new card"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
