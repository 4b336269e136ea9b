//! Board Entity
//!
//! Root of the board tree. `column_order_ids` defines column display order.

use serde::{Deserialize, Serialize};
use super::entity::{now_millis, Entity};
use super::object_id::new_object_id;
use super::{Card, Column};

/// Board visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
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

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(BoardType::Public),
            "private" => Some(BoardType::Private),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(rename = "type")]
    pub board_type: BoardType,
    pub column_order_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    #[serde(rename = "_destroy")]
    pub destroyed: bool,
}

impl Board {
    pub fn new(title: &str, description: &str, board_type: BoardType) -> Self {
        Self {
            id: new_object_id(),
            title: title.to_string(),
            slug: slugify(title),
            description: description.to_string(),
            board_type,
            column_order_ids: Vec::new(),
            created_at: now_millis(),
            updated_at: None,
            destroyed: false,
        }
    }
}

impl Entity for Board {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Column with its cards nested, as returned by board details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDetails {
    #[serde(flatten)]
    pub column: Column,
    pub cards: Vec<Card>,
}

/// Board with its columns and cards nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardDetails {
    #[serde(flatten)]
    pub board: Board,
    pub columns: Vec<ColumnDetails>,
}

/// Lowercase ASCII slug, runs of other characters collapsed to `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sprint Planning"), "sprint-planning");
        assert_eq!(slugify("  Q3 -- Roadmap!! "), "q3-roadmap");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_new_board() {
        let board = Board::new("Team Board", "Shared work", BoardType::Private);
        assert_eq!(board.slug, "team-board");
        assert!(board.column_order_ids.is_empty());
        assert!(!board.destroyed);
        assert_eq!(board.id().len(), 24);
    }

    #[test]
    fn test_board_json_shape() {
        let board = Board::new("Team Board", "Shared work", BoardType::Public);
        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["type"], "public");
        assert!(value.get("_id").is_some());
        assert!(value.get("columnOrderIds").is_some());
    }
}
