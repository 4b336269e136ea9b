//! Persistence Reconciliation
//!
//! Turns a finished gesture into the new board value plus the minimal list
//! of server writes, then runs those writes against a `BoardApi`.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::{Board, Card, Column};
use crate::placeholder::transmittable_order_ids;

/// Payload of the atomic cross-column move
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub current_card_id: String,
    pub prev_column_id: String,
    pub prev_card_order_ids: Vec<String>,
    pub next_column_id: String,
    pub next_card_order_ids: Vec<String>,
}

/// One server write. Order arrays never contain placeholder ids.
#[derive(Clone, Debug, PartialEq)]
pub enum PersistOp {
    UpdateBoardColumnOrder {
        board_id: String,
        column_order_ids: Vec<String>,
    },
    UpdateColumnCardOrder {
        column_id: String,
        card_order_ids: Vec<String>,
    },
    MoveCardToDifferentColumn(MoveCardRequest),
}

fn column_ids(columns: &[Column]) -> Vec<String> {
    columns.iter().map(|c| c.id.clone()).collect()
}

// ========================
// Gesture callbacks
// ========================

/// Columns were reordered
pub fn move_columns(board: &Board, columns: Vec<Column>) -> (Board, Vec<PersistOp>) {
    let mut next = board.clone();
    next.column_order_ids = column_ids(&columns);
    next.columns = columns;

    let mut ops = Vec::new();
    if next.column_order_ids != board.column_order_ids {
        ops.push(PersistOp::UpdateBoardColumnOrder {
            board_id: next.id.clone(),
            column_order_ids: next.column_order_ids.clone(),
        });
    }
    (next, ops)
}

/// A card moved within one column
pub fn move_card_in_same_column(
    board: &Board,
    cards: Vec<Card>,
    card_order_ids: Vec<String>,
    column_id: &str,
) -> (Board, Vec<PersistOp>) {
    let previous = board
        .columns
        .iter()
        .find(|c| c.id == column_id)
        .map(|c| transmittable_order_ids(&c.card_order_ids));

    let mut next = board.clone();
    if let Some(col) = next.columns.iter_mut().find(|c| c.id == column_id) {
        col.cards = cards;
        col.card_order_ids = card_order_ids;
    }

    let outgoing = transmittable_order_ids(
        next.columns
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.card_order_ids.as_slice())
            .unwrap_or(&[]),
    );

    let mut ops = Vec::new();
    if previous.is_some_and(|prev| prev != outgoing) {
        ops.push(PersistOp::UpdateColumnCardOrder {
            column_id: column_id.to_string(),
            card_order_ids: outgoing,
        });
    }
    (next, ops)
}

/// A card moved from `prev_column_id` to `next_column_id`; `columns` is the full new arrangement
pub fn move_card_to_different_column(
    board: &Board,
    card_id: &str,
    prev_column_id: &str,
    next_column_id: &str,
    columns: Vec<Column>,
) -> (Board, Vec<PersistOp>) {
    let mut next = board.clone();
    next.column_order_ids = column_ids(&columns);
    next.columns = columns;

    let order_of = |id: &str| {
        next.columns
            .iter()
            .find(|c| c.id == id)
            .map(|c| transmittable_order_ids(&c.card_order_ids))
            .unwrap_or_default()
    };

    let request = MoveCardRequest {
        current_card_id: card_id.to_string(),
        prev_column_id: prev_column_id.to_string(),
        prev_card_order_ids: order_of(prev_column_id),
        next_column_id: next_column_id.to_string(),
        next_card_order_ids: order_of(next_column_id),
    };
    (next, vec![PersistOp::MoveCardToDifferentColumn(request)])
}

// ========================
// Execution
// ========================

/// Server writes used by reconciliation
#[async_trait(?Send)]
pub trait BoardApi {
    async fn update_board_column_order(&self, board_id: &str, column_order_ids: &[String]) -> Result<(), String>;

    async fn update_column_card_order(&self, column_id: &str, card_order_ids: &[String]) -> Result<(), String>;

    async fn update_card_column(&self, card_id: &str, column_id: &str) -> Result<(), String>;

    /// Three independent writes; implementations with an atomic endpoint override this.
    async fn move_card_to_different_column(&self, request: &MoveCardRequest) -> Result<(), String> {
        let mut errors = Vec::new();
        if let Err(e) = self
            .update_column_card_order(&request.prev_column_id, &request.prev_card_order_ids)
            .await
        {
            errors.push(e);
        }
        if let Err(e) = self
            .update_column_card_order(&request.next_column_id, &request.next_card_order_ids)
            .await
        {
            errors.push(e);
        }
        if let Err(e) = self
            .update_card_column(&request.current_card_id, &request.next_column_id)
            .await
        {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReconcileReport {
    pub attempted: usize,
    pub failures: Vec<String>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every op in order. A failure does not stop the rest.
pub async fn apply_plan<A: BoardApi + ?Sized>(api: &A, ops: &[PersistOp]) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    for op in ops {
        report.attempted += 1;
        let result = match op {
            PersistOp::UpdateBoardColumnOrder { board_id, column_order_ids } => {
                api.update_board_column_order(board_id, column_order_ids).await
            }
            PersistOp::UpdateColumnCardOrder { column_id, card_order_ids } => {
                api.update_column_card_order(column_id, card_order_ids).await
            }
            PersistOp::MoveCardToDifferentColumn(request) => {
                api.move_card_to_different_column(request).await
            }
        };
        if let Err(e) = result {
            report.failures.push(e);
        }
    }
    report
}
