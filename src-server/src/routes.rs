//! Router Configuration
//!
//! All API routes live under `/v1`. Every request is traced; CORS is
//! supplied by the caller from the server configuration.

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::commands::{
    create_board, create_card, create_column, delete_column, get_board_details, list_boards,
    move_card_to_different_column, status, update_board, update_card, update_column,
};
use crate::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(status))
        .route("/boards", get(list_boards).post(create_board))
        .route("/boards/supports/moving_card", put(move_card_to_different_column))
        .route("/boards/{id}", get(get_board_details).put(update_board))
        .route("/columns", post(create_column))
        .route("/columns/{id}", put(update_column).delete(delete_column))
        .route("/cards", post(create_card))
        .route("/cards/{id}", put(update_card))
}

/// Create the Axum router with all routes configured
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
