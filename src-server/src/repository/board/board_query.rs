//! Board Query Operations
//!
//! Paged board listing and the nested board details read.

use async_trait::async_trait;
use rusqlite::params;
use serde::Serialize;

use crate::domain::{Board, BoardDetails, ColumnDetails, DomainError, DomainResult};
use super::super::card_repo::fetch_board_cards;
use super::super::column_repo::fetch_board_columns;
use super::super::db::not_initialized;
use super::board_repo::{fetch_board, row_to_board, BOARD_COLUMNS};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 12;

/// One page of boards plus the total count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub total_boards: u64,
}

/// Trait for board read operations
#[async_trait]
pub trait BoardQueryOperations {
    /// Live boards sorted by title; page and size below 1 use the defaults
    async fn list_page(&self, page: u64, items_per_page: u64) -> DomainResult<BoardPage>;

    /// Board with its columns and their cards, in storage order
    async fn get_details(&self, board_id: &str) -> DomainResult<Option<BoardDetails>>;
}

#[async_trait]
impl BoardQueryOperations for super::board_repo::BoardRepository {
    async fn list_page(&self, page: u64, items_per_page: u64) -> DomainResult<BoardPage> {
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let items_per_page = if items_per_page < 1 { DEFAULT_ITEMS_PER_PAGE } else { items_per_page };
        let offset = (page - 1).saturating_mul(items_per_page);

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let total_boards: i64 = conn
            .query_row("SELECT COUNT(*) FROM boards WHERE destroyed = 0", [], |row| row.get(0))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM boards WHERE destroyed = 0 ORDER BY title ASC, id ASC LIMIT ? OFFSET ?",
                BOARD_COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let limit = i64::try_from(items_per_page).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let mut rows = stmt
            .query(params![limit, offset])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut boards = Vec::new();
        while let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
            boards.push(row_to_board(row)?);
        }

        Ok(BoardPage { boards, total_boards: total_boards.max(0) as u64 })
    }

    async fn get_details(&self, board_id: &str) -> DomainResult<Option<BoardDetails>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let Some(board) = fetch_board(conn, board_id)? else {
            return Ok(None);
        };

        let mut cards = fetch_board_cards(conn, board_id)?;
        let columns = fetch_board_columns(conn, board_id)?
            .into_iter()
            .map(|column| {
                let (own, rest): (Vec<_>, Vec<_>) = cards.drain(..).partition(|c| c.column_id == column.id);
                cards = rest;
                ColumnDetails { column, cards: own }
            })
            .collect();

        Ok(Some(BoardDetails { board, columns }))
    }
}
