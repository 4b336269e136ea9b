//! Column Repository
//!
//! Columns are created and deleted together with their board's
//! `column_order_ids`, each in one transaction.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{now_millis, Column, DomainError, DomainResult};
use super::board::fetch_board;
use super::db::{decode_ids, encode_ids, not_initialized, SharedConnection};
use super::traits::Repository;

const COLUMN_COLUMNS: &str = "id, board_id, title, card_order_ids, created_at, updated_at, destroyed";

/// SQLite implementation of Column repository
pub struct ColumnRepository {
    conn: SharedConnection,
}

impl ColumnRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Column> for ColumnRepository {
    /// Insert and append to the board's column order; NotFound without a board
    async fn create(&self, entity: &Column) -> DomainResult<Column> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction().map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut board = fetch_board(&tx, &entity.board_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Board {} not found", entity.board_id)))?;

        tx.execute(
            "INSERT INTO columns (id, board_id, title, card_order_ids, created_at, updated_at, destroyed)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.id,
                entity.board_id,
                entity.title,
                encode_ids(&entity.card_order_ids)?,
                entity.created_at,
                entity.updated_at,
                entity.destroyed,
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        board.column_order_ids.push(entity.id.clone());
        tx.execute(
            "UPDATE boards SET column_order_ids = ?, updated_at = ? WHERE id = ?",
            params![encode_ids(&board.column_order_ids)?, now_millis(), board.id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        fetch_column(conn, &id)
    }

    async fn list(&self) -> DomainResult<Vec<Column>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        query_columns(conn, &format!("SELECT {} FROM columns WHERE destroyed = 0", COLUMN_COLUMNS), params![])
    }

    async fn update(&self, entity: &Column) -> DomainResult<Column> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut column = entity.clone();
        column.updated_at = Some(now_millis());

        let changed = conn
            .execute(
                "UPDATE columns SET title = ?, card_order_ids = ?, updated_at = ? WHERE id = ? AND destroyed = 0",
                params![column.title, encode_ids(&column.card_order_ids)?, column.updated_at, column.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Column {} not found", column.id)));
        }
        Ok(column)
    }

    /// Remove the column, its cards, and its id from the board order
    async fn delete(&self, id: String) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction().map_err(|e| DomainError::Internal(e.to_string()))?;

        let column = fetch_column(&tx, &id)?
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", id)))?;

        tx.execute("DELETE FROM cards WHERE column_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tx.execute("DELETE FROM columns WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Some(mut board) = fetch_board(&tx, &column.board_id)? {
            board.column_order_ids.retain(|c| *c != id);
            tx.execute(
                "UPDATE boards SET column_order_ids = ?, updated_at = ? WHERE id = ?",
                params![encode_ids(&board.column_order_ids)?, now_millis(), board.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Live column by id, usable inside a transaction
pub(crate) fn fetch_column(conn: &Connection, id: &str) -> DomainResult<Option<Column>> {
    let sql = format!("SELECT {} FROM columns WHERE id = ? AND destroyed = 0", COLUMN_COLUMNS);
    Ok(query_columns(conn, &sql, params![id])?.into_iter().next())
}

/// Live columns of a board in storage order
pub(crate) fn fetch_board_columns(conn: &Connection, board_id: &str) -> DomainResult<Vec<Column>> {
    let sql = format!("SELECT {} FROM columns WHERE board_id = ? AND destroyed = 0", COLUMN_COLUMNS);
    query_columns(conn, &sql, params![board_id])
}

fn query_columns(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> DomainResult<Vec<Column>> {
    let mut stmt = conn.prepare(sql).map_err(|e| DomainError::Internal(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut columns = Vec::new();
    while let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
        columns.push(row_to_column(row)?);
    }
    Ok(columns)
}

/// Convert a database row to Column
fn row_to_column(row: &rusqlite::Row) -> DomainResult<Column> {
    let card_order_ids: String = row.get(3).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?;

    Ok(Column {
        id: row.get(0).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        board_id: row.get(1).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        title: row.get(2).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        card_order_ids: decode_ids(&card_order_ids)?,
        created_at: row.get(4).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        updated_at: row.get::<_, Option<i64>>(5).unwrap_or(None),
        destroyed: row.get::<_, bool>(6).unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, BoardType};
    use crate::repository::{init_db, BoardRepository};
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_query_columns_surfaces_step_errors() {
        let db_state = init_db(&PathBuf::from(":memory:")).await.unwrap();
        let board = BoardRepository::new(db_state.connection())
            .create(&Board::new("Roadmap", "Seeded board", BoardType::Public))
            .await
            .unwrap();
        let columns = ColumnRepository::new(db_state.connection());
        columns.create(&Column::new(&board.id, "Todo")).await.unwrap();

        let shared = db_state.connection();
        let guard = shared.lock().await;
        let conn = guard.as_ref().unwrap();

        // abs() overflows while stepping the first row, not while preparing
        let sql = format!("SELECT {} FROM columns WHERE abs(?) >= 0", COLUMN_COLUMNS);
        let result = query_columns(conn, &sql, params![i64::MIN]);
        assert!(matches!(result, Err(DomainError::Internal(_))));

        let sql = format!("SELECT {} FROM columns WHERE abs(?) >= 0", COLUMN_COLUMNS);
        assert_eq!(query_columns(conn, &sql, params![1]).unwrap().len(), 1);
    }
}
