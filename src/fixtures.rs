//! Test fixtures shared by the board logic tests.

use crate::models::{Board, BoardType, Card, Column};
use crate::placeholder::ensure_placeholder;

pub fn card(id: &str, column_id: &str) -> Card {
    Card {
        id: id.to_string(),
        board_id: "b1".to_string(),
        column_id: column_id.to_string(),
        title: format!("card {}", id),
        description: None,
        placeholder: false,
    }
}

/// Column with the given cards, or a placeholder when `cards` is empty
pub fn column(id: &str, cards: &[&str]) -> Column {
    ensure_placeholder(Column {
        id: id.to_string(),
        board_id: "b1".to_string(),
        title: format!("column {}", id),
        card_order_ids: cards.iter().map(|c| c.to_string()).collect(),
        cards: cards.iter().map(|c| card(c, id)).collect(),
    })
}

pub fn board(columns: Vec<Column>) -> Board {
    Board {
        id: "b1".to_string(),
        title: "Board".to_string(),
        slug: "board".to_string(),
        description: "fixture".to_string(),
        board_type: BoardType::Public,
        column_order_ids: columns.iter().map(|c| c.id.clone()).collect(),
        columns,
    }
}

pub fn card_ids(column: &Column) -> Vec<&str> {
    column.cards.iter().map(|c| c.id.as_str()).collect()
}

pub fn find<'a>(columns: &'a [Column], id: &str) -> &'a Column {
    columns.iter().find(|c| c.id == id).expect("column in fixture")
}

/// Order ids match card ids, every card points at its column, and no card
/// appears twice across the board
pub fn assert_consistent(columns: &[Column]) {
    let mut seen = std::collections::HashSet::new();
    for col in columns {
        let ids: Vec<String> = col.cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(col.card_order_ids, ids, "order ids of {}", col.id);
        assert!(!col.cards.is_empty(), "column {} has no cards", col.id);
        for c in &col.cards {
            assert_eq!(c.column_id, col.id, "card {} column", c.id);
            assert!(seen.insert(c.id.clone()), "card {} appears twice", c.id);
        }
        let placeholders = col.cards.iter().filter(|c| c.placeholder).count();
        assert!(placeholders == 0 || col.cards.len() == 1, "stray placeholder in {}", col.id);
    }
}
