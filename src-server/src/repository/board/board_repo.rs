//! Board Repository - Core CRUD Operations
//!
//! SQLite-backed implementation for Board CRUD operations.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{now_millis, Board, BoardType, DomainError, DomainResult};
use super::super::db::{decode_ids, encode_ids, not_initialized, SharedConnection};
use super::super::traits::Repository;

pub(super) const BOARD_COLUMNS: &str =
    "id, title, slug, description, board_type, column_order_ids, created_at, updated_at, destroyed";

/// SQLite implementation of Board repository
pub struct BoardRepository {
    pub(super) conn: SharedConnection,
}

impl BoardRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Board> for BoardRepository {
    async fn create(&self, entity: &Board) -> DomainResult<Board> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.execute(
            "INSERT INTO boards (id, title, slug, description, board_type, column_order_ids, created_at, updated_at, destroyed)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.id,
                entity.title,
                entity.slug,
                entity.description,
                entity.board_type.as_str(),
                encode_ids(&entity.column_order_ids)?,
                entity.created_at,
                entity.updated_at,
                entity.destroyed,
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        fetch_board(conn, &id)
    }

    async fn list(&self) -> DomainResult<Vec<Board>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM boards WHERE destroyed = 0 ORDER BY title", BOARD_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query([]).map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut boards = Vec::new();
        while let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
            boards.push(row_to_board(row)?);
        }
        Ok(boards)
    }

    async fn update(&self, entity: &Board) -> DomainResult<Board> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut board = entity.clone();
        board.updated_at = Some(now_millis());

        let changed = conn
            .execute(
                "UPDATE boards SET title = ?, slug = ?, description = ?, board_type = ?, column_order_ids = ?, updated_at = ?
                 WHERE id = ? AND destroyed = 0",
                params![
                    board.title,
                    board.slug,
                    board.description,
                    board.board_type.as_str(),
                    encode_ids(&board.column_order_ids)?,
                    board.updated_at,
                    board.id,
                ],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Board {} not found", board.id)));
        }
        Ok(board)
    }

    async fn delete(&self, id: String) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        // Soft delete: the board disappears from listings and details
        conn.execute(
            "UPDATE boards SET destroyed = 1, updated_at = ? WHERE id = ?",
            params![now_millis(), id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Live board by id, usable inside a transaction
pub(crate) fn fetch_board(conn: &Connection, id: &str) -> DomainResult<Option<Board>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM boards WHERE id = ? AND destroyed = 0", BOARD_COLUMNS))
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt.query(params![id]).map_err(|e| DomainError::Internal(e.to_string()))?;

    if let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
        Ok(Some(row_to_board(row)?))
    } else {
        Ok(None)
    }
}

/// Convert a database row to Board
pub(super) fn row_to_board(row: &rusqlite::Row) -> DomainResult<Board> {
    let board_type: String = row.get(4).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?;
    let column_order_ids: String = row.get(5).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?;

    Ok(Board {
        id: row.get(0).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        title: row.get(1).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        slug: row.get(2).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        description: row.get(3).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        board_type: BoardType::parse(&board_type).unwrap_or(BoardType::Public),
        column_order_ids: decode_ids(&column_order_ids)?,
        created_at: row.get(6).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        updated_at: row.get::<_, Option<i64>>(7).unwrap_or(None),
        destroyed: row.get::<_, bool>(8).unwrap_or(false),
    })
}
