//! Request Validation
//!
//! Input payloads for create/update operations. Each `validate` collects
//! every violation and reports them together as `DomainError::InvalidInput`.
//! Update payloads reject unknown fields at deserialization.

use serde::Deserialize;
use super::board::BoardType;
use super::entity::{DomainError, DomainResult};
use super::object_id::is_object_id;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 50;
pub const DESCRIPTION_MIN: usize = 3;
pub const DESCRIPTION_MAX: usize = 256;

/// Accumulates violations
#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn text(&mut self, field: &str, value: &str, min: usize, max: usize) {
        if value.trim() != value {
            self.0.push(format!("{} must not have leading or trailing whitespace", field));
        }
        let len = value.chars().count();
        if len == 0 {
            self.0.push(format!("{} is not allowed to be empty", field));
        } else if len < min {
            self.0.push(format!("{} length must be at least {} characters long", field, min));
        } else if len > max {
            self.0.push(format!("{} length must be less than or equal to {} characters long", field, max));
        }
    }

    fn object_id(&mut self, field: &str, value: &str) {
        if !is_object_id(value) {
            self.0.push(format!("{} fails to match the Object Id pattern", field));
        }
    }

    fn object_ids(&mut self, field: &str, values: &[String]) {
        for (i, value) in values.iter().enumerate() {
            self.object_id(&format!("{}[{}]", field, i), value);
        }
    }

    fn board_type(&mut self, value: &str) {
        if BoardType::parse(value).is_none() {
            self.0.push("type must be one of [public, private]".to_string());
        }
    }

    fn finish(self) -> DomainResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(self.0.join("; ")))
        }
    }
}

/// Validate a path id
pub fn validate_id(field: &str, value: &str) -> DomainResult<()> {
    let mut v = Violations::default();
    v.object_id(field, value);
    v.finish()
}

// ========================
// Boards
// ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardInput {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub board_type: String,
}

impl CreateBoardInput {
    pub fn validate(&self) -> DomainResult<BoardType> {
        let mut v = Violations::default();
        v.text("title", &self.title, TITLE_MIN, TITLE_MAX);
        v.text("description", &self.description, DESCRIPTION_MIN, DESCRIPTION_MAX);
        v.board_type(&self.board_type);
        v.finish()?;
        BoardType::parse(&self.board_type)
            .ok_or_else(|| DomainError::InvalidInput("type must be one of [public, private]".to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBoardInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub board_type: Option<String>,
    pub column_order_ids: Option<Vec<String>>,
}

impl UpdateBoardInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        if let Some(title) = &self.title {
            v.text("title", title, TITLE_MIN, TITLE_MAX);
        }
        if let Some(description) = &self.description {
            v.text("description", description, DESCRIPTION_MIN, DESCRIPTION_MAX);
        }
        if let Some(kind) = &self.board_type {
            v.board_type(kind);
        }
        if let Some(ids) = &self.column_order_ids {
            v.object_ids("columnOrderIds", ids);
        }
        v.finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardInput {
    pub current_card_id: String,
    pub prev_column_id: String,
    pub prev_card_order_ids: Vec<String>,
    pub next_column_id: String,
    pub next_card_order_ids: Vec<String>,
}

impl MoveCardInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        v.object_id("currentCardId", &self.current_card_id);
        v.object_id("prevColumnId", &self.prev_column_id);
        v.object_ids("prevCardOrderIds", &self.prev_card_order_ids);
        v.object_id("nextColumnId", &self.next_column_id);
        v.object_ids("nextCardOrderIds", &self.next_card_order_ids);
        v.finish()
    }
}

// ========================
// Columns
// ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnInput {
    pub board_id: String,
    pub title: String,
}

impl CreateColumnInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        v.object_id("boardId", &self.board_id);
        v.text("title", &self.title, TITLE_MIN, TITLE_MAX);
        v.finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateColumnInput {
    pub title: Option<String>,
    pub card_order_ids: Option<Vec<String>>,
}

impl UpdateColumnInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        if let Some(title) = &self.title {
            v.text("title", title, TITLE_MIN, TITLE_MAX);
        }
        if let Some(ids) = &self.card_order_ids {
            v.object_ids("cardOrderIds", ids);
        }
        v.finish()
    }
}

// ========================
// Cards
// ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardInput {
    pub board_id: String,
    pub column_id: String,
    pub title: String,
    pub description: Option<String>,
}

impl CreateCardInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        v.object_id("boardId", &self.board_id);
        v.object_id("columnId", &self.column_id);
        v.text("title", &self.title, TITLE_MIN, TITLE_MAX);
        if let Some(description) = &self.description {
            v.text("description", description, DESCRIPTION_MIN, DESCRIPTION_MAX);
        }
        v.finish()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCardInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub column_id: Option<String>,
}

impl UpdateCardInput {
    pub fn validate(&self) -> DomainResult<()> {
        let mut v = Violations::default();
        if let Some(title) = &self.title {
            v.text("title", title, TITLE_MIN, TITLE_MAX);
        }
        if let Some(description) = &self.description {
            v.text("description", description, DESCRIPTION_MIN, DESCRIPTION_MAX);
        }
        if let Some(column_id) = &self.column_id {
            v.object_id("columnId", column_id);
        }
        v.finish()
    }
}
