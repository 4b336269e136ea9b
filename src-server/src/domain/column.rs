//! Column Entity

use serde::{Deserialize, Serialize};
use super::entity::{now_millis, Entity};
use super::object_id::new_object_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "_id")]
    pub id: String,
    pub board_id: String,
    pub title: String,
    /// Display order of the column's cards
    pub card_order_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    #[serde(rename = "_destroy")]
    pub destroyed: bool,
}

impl Column {
    pub fn new(board_id: &str, title: &str) -> Self {
        Self {
            id: new_object_id(),
            board_id: board_id.to_string(),
            title: title.to_string(),
            card_order_ids: Vec::new(),
            created_at: now_millis(),
            updated_at: None,
            destroyed: false,
        }
    }
}

impl Entity for Column {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
