//! Card Commands

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::validation::{validate_id, CreateCardInput, UpdateCardInput};
use crate::domain::{Card, DomainError};
use crate::error::ApiResult;
use crate::repository::Repository;
use crate::AppState;

/// Create a card at the end of its column
pub async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Card>)> {
    let Json(input) = payload?;
    input.validate()?;

    let card = Card::new(&input.board_id, &input.column_id, &input.title, input.description.as_deref());
    let created = state.card_repo.create(&card).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update card fields
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCardInput>, JsonRejection>,
) -> ApiResult<Json<Card>> {
    validate_id("id", &id)?;
    let Json(input) = payload?;
    input.validate()?;

    let existing = state
        .card_repo
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", id)))?;

    let updated = Card {
        title: input.title.unwrap_or(existing.title),
        description: input.description.or(existing.description),
        column_id: input.column_id.unwrap_or(existing.column_id),
        ..existing
    };

    Ok(Json(state.card_repo.update(&updated).await?))
}
