//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The active board is the single source the board view renders from;
//! only gesture outcomes and form submissions write it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, Card, Column};
use crate::placeholder::{ensure_placeholder, strip_placeholder};
use crate::sorts::map_order;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards listed in the tab bar
    pub boards: Vec<Board>,
    /// Board currently open, already ordered and with placeholders
    pub active_board: Option<Board>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Board Preparation
// ========================

/// Order columns and cards by their order arrays and give empty columns a placeholder
pub fn prepare_board(mut board: Board) -> Board {
    let columns = std::mem::take(&mut board.columns);
    board.columns = map_order(columns, &board.column_order_ids, |c| c.id.as_str())
        .into_iter()
        .map(|mut col| {
            let cards = std::mem::take(&mut col.cards);
            col.cards = map_order(cards, &col.card_order_ids, |c| c.id.as_str());
            ensure_placeholder(col)
        })
        .collect();
    board
}

/// Board with `column` appended (placeholder included)
pub fn board_with_column(mut board: Board, column: Column) -> Board {
    let column = ensure_placeholder(column);
    board.column_order_ids.push(column.id.clone());
    board.columns.push(column);
    board
}

/// Board with `card` added to the end of its column, replacing the placeholder
pub fn board_with_card(mut board: Board, card: Card) -> Board {
    if let Some(col) = board.columns.iter_mut().find(|c| c.id == card.column_id) {
        let mut next = strip_placeholder(col.clone());
        next.card_order_ids.push(card.id.clone());
        next.cards.push(card);
        *col = next;
    }
    board
}

pub fn board_without_column(mut board: Board, column_id: &str) -> Board {
    board.columns.retain(|c| c.id != column_id);
    board.column_order_ids.retain(|id| id != column_id);
    board
}

pub fn board_with_column_title(mut board: Board, column_id: &str, title: &str) -> Board {
    if let Some(col) = board.columns.iter_mut().find(|c| c.id == column_id) {
        col.title = title.to_string();
    }
    board
}

// ========================
// Store Helper Functions
// ========================

fn update_active(store: &AppStore, f: impl FnOnce(Board) -> Board) {
    let field = store.active_board();
    let mut guard = field.write();
    if let Some(board) = guard.take() {
        *guard = Some(f(board));
    }
}

/// Replace the active board with a freshly fetched one
pub fn store_set_board(store: &AppStore, board: Board) {
    store.active_board().set(Some(prepare_board(board)));
}

pub fn store_add_column(store: &AppStore, column: Column) {
    update_active(store, |b| board_with_column(b, column));
}

pub fn store_add_card(store: &AppStore, card: Card) {
    update_active(store, |b| board_with_card(b, card));
}

pub fn store_remove_column(store: &AppStore, column_id: &str) {
    update_active(store, |b| board_without_column(b, column_id));
}

pub fn store_rename_column(store: &AppStore, column_id: &str, title: &str) {
    update_active(store, |b| board_with_column_title(b, column_id, title));
}

/// Add a board to the tab list
pub fn store_add_board(store: &AppStore, board: Board) {
    store.boards().write().push(board);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{board, card, card_ids, column, find};

    #[test]
    fn test_prepare_board_orders_and_fills() {
        let mut raw = board(vec![column("c1", &["a", "b"]), column("c2", &[])]);
        raw.column_order_ids = vec!["c2".into(), "c1".into()];
        raw.columns[0].card_order_ids = vec!["b".into(), "a".into()];
        // Server payloads carry no placeholders
        raw.columns[1].cards.clear();
        raw.columns[1].card_order_ids.clear();

        let prepared = prepare_board(raw);
        let ids: Vec<_> = prepared.columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c1"]);
        assert_eq!(card_ids(find(&prepared.columns, "c1")), vec!["b", "a"]);
        assert_eq!(card_ids(find(&prepared.columns, "c2")), vec!["c2-placeholder-card"]);
    }

    #[test]
    fn test_prepare_board_is_idempotent() {
        let once = prepare_board(board(vec![column("c1", &["a"]), column("c2", &[])]));
        let twice = prepare_board(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_new_column_gets_placeholder() {
        let mut fresh = column("c9", &[]);
        fresh.cards.clear();
        fresh.card_order_ids.clear();

        let next = board_with_column(board(vec![column("c1", &["a"])]), fresh);
        assert_eq!(next.column_order_ids, vec!["c1", "c9"]);
        assert_eq!(card_ids(find(&next.columns, "c9")), vec!["c9-placeholder-card"]);
    }

    #[test]
    fn test_new_card_replaces_placeholder() {
        let next = board_with_card(board(vec![column("c1", &[])]), card("k1", "c1"));
        assert_eq!(next.columns[0].card_order_ids, vec!["k1"]);
        assert_eq!(card_ids(&next.columns[0]), vec!["k1"]);

        let next = board_with_card(next, card("k2", "c1"));
        assert_eq!(card_ids(&next.columns[0]), vec!["k1", "k2"]);
    }

    #[test]
    fn test_remove_column_updates_order() {
        let next = board_without_column(board(vec![column("c1", &[]), column("c2", &[])]), "c1");
        assert_eq!(next.column_order_ids, vec!["c2"]);
        assert_eq!(next.columns.len(), 1);
    }

    #[test]
    fn test_store_helpers_update_active_board() {
        let store = Store::new(AppState::default());
        store_set_board(&store, board(vec![column("c1", &[])]));

        let mut fresh = column("c2", &[]);
        fresh.cards.clear();
        fresh.card_order_ids.clear();
        store_add_column(&store, fresh);
        store_add_card(&store, card("k1", "c1"));
        store_rename_column(&store, "c2", "Done");

        let active = store.active_board().get_untracked().expect("active board");
        assert_eq!(active.column_order_ids, vec!["c1", "c2"]);
        assert_eq!(card_ids(find(&active.columns, "c1")), vec!["k1"]);
        assert_eq!(card_ids(find(&active.columns, "c2")), vec!["c2-placeholder-card"]);
        assert_eq!(find(&active.columns, "c2").title, "Done");

        store_remove_column(&store, "c1");
        let active = store.active_board().get_untracked().expect("active board");
        assert_eq!(active.column_order_ids, vec!["c2"]);
    }

    #[test]
    fn test_store_helpers_ignore_missing_board() {
        let store = Store::new(AppState::default());
        store_add_card(&store, card("k1", "c1"));
        assert!(store.active_board().get_untracked().is_none());
    }

    #[test]
    fn test_rename_column() {
        let next = board_with_column_title(board(vec![column("c1", &[])]), "c1", "Done");
        assert_eq!(next.columns[0].title, "Done");
    }
}
