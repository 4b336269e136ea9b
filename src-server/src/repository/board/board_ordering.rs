//! Board Ordering Operations
//!
//! Moving a card between columns touches three rows; they change together
//! or not at all.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::validation::MoveCardInput;
use crate::domain::{now_millis, DomainError, DomainResult};
use super::super::db::{encode_ids, not_initialized};

/// Trait for board ordering operations
#[async_trait]
pub trait BoardOrderingOperations {
    /// Set both columns' card orders and the card's column in one transaction
    async fn move_card_to_different_column(&self, input: &MoveCardInput) -> DomainResult<()>;
}

#[async_trait]
impl BoardOrderingOperations for super::board_repo::BoardRepository {
    async fn move_card_to_different_column(&self, input: &MoveCardInput) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction().map_err(|e| DomainError::Internal(e.to_string()))?;
        let now = now_millis();

        for (column_id, order) in [
            (&input.prev_column_id, &input.prev_card_order_ids),
            (&input.next_column_id, &input.next_card_order_ids),
        ] {
            let changed = tx
                .execute(
                    "UPDATE columns SET card_order_ids = ?, updated_at = ? WHERE id = ? AND destroyed = 0",
                    params![encode_ids(order)?, now, column_id],
                )
                .map_err(|e| DomainError::Internal(e.to_string()))?;
            if changed == 0 {
                // Dropping the transaction rolls back
                return Err(DomainError::NotFound(format!("Column {} not found", column_id)));
            }
        }

        let changed = tx
            .execute(
                "UPDATE cards SET column_id = ?, updated_at = ? WHERE id = ? AND destroyed = 0",
                params![input.next_column_id, now, input.current_card_id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", input.current_card_id)));
        }

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        tracing::info!(
            "Moved card {} from column {} to {}",
            input.current_card_id,
            input.prev_column_id,
            input.next_column_id
        );
        Ok(())
    }
}
