//! Board API Client
//!
//! Frontend bindings to the REST backend, organized by resource.

mod board;
mod column;
mod card;
mod api;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Backend root, baked in at build time
pub const API_ROOT: &str = match option_env!("KANBAN_API_ROOT") {
    Some(root) => root,
    None => "http://localhost:8017",
};

/// Error body returned by the backend
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
}

fn url(path: &str) -> String {
    format!("{}/v1{}", API_ROOT, path)
}

/// Send a request and decode the JSON body, or the backend error message
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, String> {
    let response = request.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {}", status),
        };
        web_sys::console::log_1(&format!("[API] {} {}", status, message).into());
        return Err(message);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

// Re-export all public items
pub use board::*;
pub use column::*;
pub use card::*;
pub use api::HttpBoardApi;
