//! Board Commands

use serde::Serialize;
use crate::models::{Board, BoardPage, BoardType};
use crate::reconcile::MoveCardRequest;
use super::{send_json, url};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateBoardArgs<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    board_type: BoardType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnOrderArgs<'a> {
    column_order_ids: &'a [String],
}

// ========================
// Commands
// ========================

pub async fn list_boards(page: u32, items_per_page: u32) -> Result<BoardPage, String> {
    let request = reqwest::Client::new()
        .get(url("/boards"))
        .query(&[("page", page), ("itemsPerPage", items_per_page)]);
    send_json(request).await
}

pub async fn create_board(title: &str, description: &str, board_type: BoardType) -> Result<Board, String> {
    let args = CreateBoardArgs { title, description, board_type };
    send_json(reqwest::Client::new().post(url("/boards")).json(&args)).await
}

/// Board with raw, unsorted columns and cards
pub async fn get_board_details(board_id: &str) -> Result<Board, String> {
    send_json(reqwest::Client::new().get(url(&format!("/boards/{}", board_id)))).await
}

pub async fn update_board_column_order(board_id: &str, column_order_ids: &[String]) -> Result<Board, String> {
    let args = ColumnOrderArgs { column_order_ids };
    send_json(reqwest::Client::new().put(url(&format!("/boards/{}", board_id))).json(&args)).await
}

/// Atomic cross-column move
pub async fn move_card_to_different_column(request: &MoveCardRequest) -> Result<(), String> {
    let _: serde_json::Value = send_json(
        reqwest::Client::new()
            .put(url("/boards/supports/moving_card"))
            .json(request),
    )
    .await?;
    Ok(())
}
