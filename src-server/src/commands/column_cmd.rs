//! Column Commands

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::domain::validation::{validate_id, CreateColumnInput, UpdateColumnInput};
use crate::domain::{Column, DomainError};
use crate::error::ApiResult;
use crate::repository::Repository;
use crate::AppState;

/// Create a column at the end of its board
pub async fn create_column(
    State(state): State<AppState>,
    payload: Result<Json<CreateColumnInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Column>)> {
    let Json(input) = payload?;
    input.validate()?;

    let created = state.column_repo.create(&Column::new(&input.board_id, &input.title)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Rename a column or replace its card order
pub async fn update_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateColumnInput>, JsonRejection>,
) -> ApiResult<Json<Column>> {
    validate_id("id", &id)?;
    let Json(input) = payload?;
    input.validate()?;

    let existing = state
        .column_repo
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", id)))?;

    let updated = Column {
        title: input.title.unwrap_or(existing.title),
        card_order_ids: input.card_order_ids.unwrap_or(existing.card_order_ids),
        ..existing
    };

    Ok(Json(state.column_repo.update(&updated).await?))
}

/// Delete a column with its cards
pub async fn delete_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    validate_id("id", &id)?;
    state.column_repo.delete(id.clone()).await?;
    tracing::info!("Deleted column {}", id);
    Ok(Json(json!({ "deleteResult": "Column and its Cards deleted successfully!" })))
}
