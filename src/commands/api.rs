//! HTTP implementation of the reconciliation writes.

use async_trait::async_trait;
use crate::reconcile::{BoardApi, MoveCardRequest};

#[derive(Clone, Copy, Default)]
pub struct HttpBoardApi;

#[async_trait(?Send)]
impl BoardApi for HttpBoardApi {
    async fn update_board_column_order(&self, board_id: &str, column_order_ids: &[String]) -> Result<(), String> {
        super::update_board_column_order(board_id, column_order_ids).await.map(|_| ())
    }

    async fn update_column_card_order(&self, column_id: &str, card_order_ids: &[String]) -> Result<(), String> {
        super::update_column_card_order(column_id, card_order_ids).await.map(|_| ())
    }

    async fn update_card_column(&self, card_id: &str, column_id: &str) -> Result<(), String> {
        super::update_card_column(card_id, column_id).await.map(|_| ())
    }

    /// One transactional call instead of three independent writes
    async fn move_card_to_different_column(&self, request: &MoveCardRequest) -> Result<(), String> {
        super::move_card_to_different_column(request).await
    }
}
