//! Card Entity

use serde::{Deserialize, Serialize};
use super::entity::{now_millis, Entity};
use super::object_id::new_object_id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub board_id: String,
    /// Column whose `card_order_ids` lists this card
    pub column_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    #[serde(rename = "_destroy")]
    pub destroyed: bool,
}

impl Card {
    pub fn new(board_id: &str, column_id: &str, title: &str, description: Option<&str>) -> Self {
        Self {
            id: new_object_id(),
            board_id: board_id.to_string(),
            column_id: column_id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            created_at: now_millis(),
            updated_at: None,
            destroyed: false,
        }
    }
}

impl Entity for Card {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
