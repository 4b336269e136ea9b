//! Column Commands

use serde::Serialize;
use crate::models::Column;
use super::{send_json, url};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateColumnArgs<'a> {
    board_id: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardOrderArgs<'a> {
    card_order_ids: &'a [String],
}

pub async fn create_column(board_id: &str, title: &str) -> Result<Column, String> {
    let args = CreateColumnArgs { board_id, title };
    send_json(reqwest::Client::new().post(url("/columns")).json(&args)).await
}

pub async fn rename_column(column_id: &str, title: &str) -> Result<Column, String> {
    let args = TitleArgs { title };
    send_json(reqwest::Client::new().put(url(&format!("/columns/{}", column_id))).json(&args)).await
}

/// `card_order_ids` must already be free of placeholder ids
pub async fn update_column_card_order(column_id: &str, card_order_ids: &[String]) -> Result<Column, String> {
    let args = CardOrderArgs { card_order_ids };
    send_json(reqwest::Client::new().put(url(&format!("/columns/{}", column_id))).json(&args)).await
}

pub async fn delete_column(column_id: &str) -> Result<(), String> {
    let _: serde_json::Value =
        send_json(reqwest::Client::new().delete(url(&format!("/columns/{}", column_id)))).await?;
    Ok(())
}
