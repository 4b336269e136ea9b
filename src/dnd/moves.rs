//! Board Mutations
//!
//! Value-level moves applied during a drag. Every function builds new
//! columns; inputs are never modified.

use crate::models::{Card, Column};
use crate::placeholder::{ensure_placeholder, placeholder_for};
use crate::sorts::array_move;

/// Column whose cards contain `card_id`
pub fn find_column_by_card_id<'a>(columns: &'a [Column], card_id: &str) -> Option<&'a Column> {
    columns
        .iter()
        .find(|col| col.cards.iter().any(|c| c.id == card_id))
}

/// Column addressed by `over_id`, which is either a column id or a card id
pub fn find_target_column<'a>(columns: &'a [Column], over_id: &str) -> Option<&'a Column> {
    columns
        .iter()
        .find(|col| col.id == over_id)
        .or_else(|| find_column_by_card_id(columns, over_id))
}

/// Where a card dropped over `over_id` lands in `target`.
///
/// Below the hovered card's midpoint inserts after it, otherwise before.
/// Hovering the column itself yields `len + 1`, clamped to the end on insert.
pub fn insertion_index(target: &Column, over_id: &str, below_over_center: bool) -> usize {
    match target.cards.iter().position(|c| c.id == over_id) {
        Some(idx) if below_over_center => idx + 1,
        Some(idx) => idx,
        None => target.cards.len() + 1,
    }
}

fn rebuild_order_ids(column: &mut Column) {
    column.card_order_ids = column.cards.iter().map(|c| c.id.clone()).collect();
}

/// Take `card_id` out of `column`, leaving a placeholder if it empties
fn without_card(column: &Column, card_id: &str) -> Column {
    let mut next = column.clone();
    next.cards.retain(|c| c.id != card_id);
    if next.cards.is_empty() {
        next.cards.push(placeholder_for(&next));
    }
    rebuild_order_ids(&mut next);
    next
}

/// Put `card` into `column` at `index`, dropping any earlier copy and the placeholder
fn with_card_at(column: &Column, card: &Card, index: usize) -> Column {
    let mut next = column.clone();
    next.cards.retain(|c| c.id != card.id);

    let mut moved = card.clone();
    moved.column_id = next.id.clone();
    let index = index.min(next.cards.len());
    next.cards.insert(index, moved);

    next.cards.retain(|c| !c.placeholder);
    rebuild_order_ids(&mut next);
    next
}

/// Move `card` from `origin_id` to `target_id`, inserting at `index`
pub fn move_card_between_columns(
    columns: &[Column],
    card: &Card,
    origin_id: &str,
    target_id: &str,
    index: usize,
) -> Vec<Column> {
    columns
        .iter()
        .map(|col| {
            let mut next = col.clone();
            if next.id == origin_id {
                next = without_card(&next, &card.id);
            }
            if next.id == target_id {
                next = with_card_at(&next, card, index);
            }
            next
        })
        .collect()
}

/// Remove `card_id` from every column except `keep_id`
pub fn detach_card_elsewhere(columns: &[Column], card_id: &str, keep_id: &str) -> Vec<Column> {
    columns
        .iter()
        .map(|col| {
            if col.id != keep_id && col.cards.iter().any(|c| c.id == card_id) {
                ensure_placeholder(without_card(col, card_id))
            } else {
                col.clone()
            }
        })
        .collect()
}

/// `column` with the card at `from` moved to `to`
pub fn reorder_cards_in_column(column: &Column, from: usize, to: usize) -> Column {
    let mut next = column.clone();
    next.cards = array_move(next.cards, from, to);
    rebuild_order_ids(&mut next);
    next
}

pub fn reorder_columns(columns: &[Column], from: usize, to: usize) -> Vec<Column> {
    array_move(columns.to_vec(), from, to)
}

/// Replace the column with the same id
pub fn replace_column(columns: &[Column], replacement: Column) -> Vec<Column> {
    columns
        .iter()
        .map(|col| {
            if col.id == replacement.id {
                replacement.clone()
            } else {
                col.clone()
            }
        })
        .collect()
}
