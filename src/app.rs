//! Kanban Board Frontend App
//!
//! Board tab bar on top, the open board below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::components::{BoardContent, BoardTabBar};
use crate::store::{store_set_board, AppState, AppStateStoreFields, AppStore};

/// First page of the board list
const DEFAULT_PAGE: u32 = 1;
const DEFAULT_ITEMS_PER_PAGE: u32 = 12;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = reactive_stores::Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_board, set_current_board) = signal::<Option<String>>(None);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (current_board, set_current_board));
    provide_context(ctx);

    // Load board list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_boards(DEFAULT_PAGE, DEFAULT_ITEMS_PER_PAGE).await {
                Ok(page) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} of {} boards", page.boards.len(), page.total_boards).into());
                    let first = page.boards.first().map(|b| b.id.clone());
                    store.boards().set(page.boards);
                    if ctx.current_board.get_untracked().is_none() {
                        if let Some(id) = first {
                            ctx.open_board(id);
                        }
                    }
                }
                Err(e) => web_sys::console::log_1(&format!("[APP] Failed to load boards: {}", e).into()),
            }
        });
    });

    // Load the open board when it changes or a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(board_id) = current_board.get() else { return };
        web_sys::console::log_1(&format!("[APP] Loading board {}, trigger={}", board_id, trigger).into());
        spawn_local(async move {
            match commands::get_board_details(&board_id).await {
                Ok(board) => store_set_board(&store, board),
                Err(e) => web_sys::console::log_1(&format!("[APP] Failed to load board: {}", e).into()),
            }
        });
    });

    view! {
        <div class="app-layout">
            <BoardTabBar />
            <main class="main-content">
                <h1>{move || store.active_board().with(|b| b.as_ref().map(|b| b.title.clone()).unwrap_or_else(|| "Boards".to_string()))}</h1>
                <BoardContent />
            </main>
        </div>
    }
}
