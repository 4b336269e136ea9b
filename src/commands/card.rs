//! Card Commands

use serde::Serialize;
use crate::models::Card;
use super::{send_json, url};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCardArgs<'a> {
    board_id: &'a str,
    column_id: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardColumnArgs<'a> {
    column_id: &'a str,
}

pub async fn create_card(board_id: &str, column_id: &str, title: &str) -> Result<Card, String> {
    let args = CreateCardArgs { board_id, column_id, title };
    send_json(reqwest::Client::new().post(url("/cards")).json(&args)).await
}

pub async fn update_card_column(card_id: &str, column_id: &str) -> Result<Card, String> {
    let args = CardColumnArgs { column_id };
    send_json(reqwest::Client::new().put(url(&format!("/cards/{}", card_id))).json(&args)).await
}
