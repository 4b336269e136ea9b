//! Placeholder Cards
//!
//! An empty column holds one synthetic card so it still presents a drop
//! region. Placeholders live only in client state.

use crate::models::{Card, Column};

pub const PLACEHOLDER_SUFFIX: &str = "-placeholder-card";

pub fn placeholder_id(column_id: &str) -> String {
    format!("{}{}", column_id, PLACEHOLDER_SUFFIX)
}

pub fn is_placeholder_id(id: &str) -> bool {
    id.ends_with(PLACEHOLDER_SUFFIX)
}

/// Placeholder card for `column`
pub fn placeholder_for(column: &Column) -> Card {
    Card {
        id: placeholder_id(&column.id),
        board_id: column.board_id.clone(),
        column_id: column.id.clone(),
        title: String::new(),
        description: None,
        placeholder: true,
    }
}

pub fn has_real_cards(column: &Column) -> bool {
    column.cards.iter().any(|c| !c.placeholder)
}

/// Give a column with no real cards exactly one placeholder
pub fn ensure_placeholder(mut column: Column) -> Column {
    if has_real_cards(&column) {
        return column;
    }
    let card = placeholder_for(&column);
    column.card_order_ids = vec![card.id.clone()];
    column.cards = vec![card];
    column
}

/// Drop placeholders from a column's cards and order ids
pub fn strip_placeholder(mut column: Column) -> Column {
    column.cards.retain(|c| !c.placeholder);
    column.card_order_ids.retain(|id| !is_placeholder_id(id));
    column
}

/// Order ids safe to send to the server
pub fn transmittable_order_ids(ids: &[String]) -> Vec<String> {
    ids.iter().filter(|id| !is_placeholder_id(id)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(id: &str, cards: &[&str]) -> Column {
        Column {
            id: id.to_string(),
            board_id: "b1".to_string(),
            title: id.to_string(),
            card_order_ids: cards.iter().map(|s| s.to_string()).collect(),
            cards: cards
                .iter()
                .map(|c| Card {
                    id: c.to_string(),
                    board_id: "b1".to_string(),
                    column_id: id.to_string(),
                    title: c.to_string(),
                    description: None,
                    placeholder: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_placeholder_fields_derive_from_column() {
        let card = placeholder_for(&column("c9", &[]));
        assert_eq!(card.id, "c9-placeholder-card");
        assert_eq!(card.column_id, "c9");
        assert_eq!(card.board_id, "b1");
        assert!(card.placeholder);
    }

    #[test]
    fn test_ensure_placeholder_only_on_empty() {
        let empty = ensure_placeholder(column("c1", &[]));
        assert_eq!(empty.card_order_ids, vec!["c1-placeholder-card"]);
        assert_eq!(empty.cards.len(), 1);

        let full = ensure_placeholder(column("c2", &["a"]));
        assert_eq!(full.card_order_ids, vec!["a"]);
    }

    #[test]
    fn test_ensure_placeholder_is_stable() {
        let once = ensure_placeholder(column("c1", &[]));
        let twice = ensure_placeholder(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_placeholder() {
        let col = strip_placeholder(ensure_placeholder(column("c1", &[])));
        assert!(col.cards.is_empty());
        assert!(col.card_order_ids.is_empty());
    }

    #[test]
    fn test_transmittable_order_ids_filters_placeholders() {
        let ids = vec!["c3-placeholder-card".to_string()];
        assert!(transmittable_order_ids(&ids).is_empty());

        let ids = vec!["a".to_string(), "c1-placeholder-card".to_string(), "b".to_string()];
        assert_eq!(transmittable_order_ids(&ids), vec!["a", "b"]);
    }
}
