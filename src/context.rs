//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the open board from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the open board from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Id of the open board - read
    pub current_board: ReadSignal<Option<String>>,
    /// Id of the open board - write
    set_current_board: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_board: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_board: current_board.0,
            set_current_board: current_board.1,
        }
    }

    /// Re-fetch the open board, discarding local state
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_board(&self, board_id: String) {
        self.set_current_board.set(Some(board_id));
    }
}
