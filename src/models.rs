//! Frontend Models
//!
//! Data structures matching the board API payloads.

use serde::{Deserialize, Serialize};

/// Board visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    #[default]
    Public,
    Private,
}

impl BoardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardType::Public => "public",
            BoardType::Private => "private",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "private" => BoardType::Private,
            _ => BoardType::Public,
        }
    }
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    pub board_id: String,
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Synthetic card standing in for an empty column; never sent to the server
    #[serde(skip)]
    pub placeholder: bool,
}

/// Column data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(rename = "_id")]
    pub id: String,
    pub board_id: String,
    pub title: String,
    #[serde(default)]
    pub card_order_ids: Vec<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub board_type: BoardType,
    #[serde(default)]
    pub column_order_ids: Vec<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// One page of the board list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub total_boards: u64,
}
