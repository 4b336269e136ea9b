//! Board Commands
//!
//! Listing, creation, details, updates, and the atomic cross-column card move.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::validation::{validate_id, CreateBoardInput, MoveCardInput, UpdateBoardInput};
use crate::domain::{slugify, Board, BoardDetails, BoardType, DomainError};
use crate::error::ApiResult;
use crate::repository::{BoardOrderingOperations, BoardPage, BoardQueryOperations, Repository};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<u64>,
    pub items_per_page: Option<u64>,
}

/// List boards, one page at a time
pub async fn list_boards(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<BoardPage>> {
    let Query(query) = query?;
    let page = state
        .board_repo
        .list_page(query.page.unwrap_or(0), query.items_per_page.unwrap_or(0))
        .await?;
    Ok(Json(page))
}

/// Create a new board
pub async fn create_board(
    State(state): State<AppState>,
    payload: Result<Json<CreateBoardInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Board>)> {
    let Json(input) = payload?;
    let board_type = input.validate()?;

    let board = Board::new(&input.title, &input.description, board_type);
    let created = state.board_repo.create(&board).await?;
    tracing::info!("Created board {} ({})", created.id, created.slug);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Board with its columns and cards
pub async fn get_board_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BoardDetails>> {
    validate_id("id", &id)?;
    let details = state
        .board_repo
        .get_details(&id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Board {} not found", id)))?;
    Ok(Json(details))
}

/// Update board fields
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBoardInput>, JsonRejection>,
) -> ApiResult<Json<Board>> {
    validate_id("id", &id)?;
    let Json(input) = payload?;
    input.validate()?;

    let existing = state
        .board_repo
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Board {} not found", id)))?;

    let title = input.title.unwrap_or(existing.title);
    let updated = Board {
        slug: slugify(&title),
        title,
        description: input.description.unwrap_or(existing.description),
        board_type: input
            .board_type
            .as_deref()
            .and_then(BoardType::parse)
            .unwrap_or(existing.board_type),
        column_order_ids: input.column_order_ids.unwrap_or(existing.column_order_ids),
        ..existing
    };

    Ok(Json(state.board_repo.update(&updated).await?))
}

/// Move a card between columns in one transaction
pub async fn move_card_to_different_column(
    State(state): State<AppState>,
    payload: Result<Json<MoveCardInput>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(input) = payload?;
    input.validate()?;
    state.board_repo.move_card_to_different_column(&input).await?;
    Ok(Json(json!({ "updateResult": "Successfully" })))
}
