//! HTTP Command Handlers
//!
//! axum handlers over the repositories, organized by resource.

mod board_cmd;
mod column_cmd;
mod card_cmd;


use axum::Json;
use serde_json::{json, Value};

// Re-export all handlers
pub use board_cmd::*;
pub use column_cmd::*;
pub use card_cmd::*;

/// API readiness check
pub async fn status() -> Json<Value> {
    Json(json!({ "message": "APIs V1 are ready to use." }))
}
