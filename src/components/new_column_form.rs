//! New Column Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_add_column, use_app_store};

/// Form appended after the last column
#[component]
pub fn NewColumnForm(#[prop(into)] board_id: Signal<Option<String>>) -> impl IntoView {
    let store = use_app_store();
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() {
            set_error.set(Some("Please enter column title".to_string()));
            return;
        }
        let Some(board_id) = board_id.get() else { return };

        spawn_local(async move {
            match commands::create_column(&board_id, &text).await {
                Ok(column) => {
                    web_sys::console::log_1(&format!("[BOARD] Created column {}", column.id).into());
                    store_add_column(&store, column);
                    set_title.set(String::new());
                    set_error.set(None);
                    set_open.set(false);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="new-column">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button class="new-column-btn" on:click=move |_| set_open.set(true)>
                        "+ Add new column"
                    </button>
                }
            >
                <form class="new-column-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="Enter column title..."
                        autofocus=true
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <button type="submit">"Add Column"</button>
                    <button type="button" on:click=move |_| set_open.set(false)>"×"</button>
                    {move || error.get().map(|e| view! { <span class="form-error">{e}</span> })}
                </form>
            </Show>
        </div>
    }
}
