//! Card Repository
//!
//! Card creation appends the card's id to its column's `card_order_ids`
//! in the same transaction.

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::domain::{now_millis, Card, DomainError, DomainResult};
use super::column_repo::fetch_column;
use super::db::{encode_ids, not_initialized, SharedConnection};
use super::traits::Repository;

const CARD_COLUMNS: &str = "id, board_id, column_id, title, description, created_at, updated_at, destroyed";

/// SQLite implementation of Card repository
pub struct CardRepository {
    conn: SharedConnection,
}

impl CardRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Card> for CardRepository {
    /// NotFound unless the column exists on the card's board
    async fn create(&self, entity: &Card) -> DomainResult<Card> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction().map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut column = fetch_column(&tx, &entity.column_id)?
            .filter(|c| c.board_id == entity.board_id)
            .ok_or_else(|| DomainError::NotFound(format!("Column {} not found", entity.column_id)))?;

        tx.execute(
            "INSERT INTO cards (id, board_id, column_id, title, description, created_at, updated_at, destroyed)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.id,
                entity.board_id,
                entity.column_id,
                entity.title,
                entity.description,
                entity.created_at,
                entity.updated_at,
                entity.destroyed,
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        column.card_order_ids.push(entity.id.clone());
        tx.execute(
            "UPDATE columns SET card_order_ids = ?, updated_at = ? WHERE id = ?",
            params![encode_ids(&column.card_order_ids)?, now_millis(), column.id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        let sql = format!("SELECT {} FROM cards WHERE id = ? AND destroyed = 0", CARD_COLUMNS);
        Ok(query_cards(conn, &sql, params![id])?.into_iter().next())
    }

    async fn list(&self) -> DomainResult<Vec<Card>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        query_cards(conn, &format!("SELECT {} FROM cards WHERE destroyed = 0", CARD_COLUMNS), params![])
    }

    async fn update(&self, entity: &Card) -> DomainResult<Card> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut card = entity.clone();
        card.updated_at = Some(now_millis());

        let changed = conn
            .execute(
                "UPDATE cards SET title = ?, description = ?, column_id = ?, updated_at = ? WHERE id = ? AND destroyed = 0",
                params![card.title, card.description, card.column_id, card.updated_at, card.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Card {} not found", card.id)));
        }
        Ok(card)
    }

    /// Remove the card and pull it from its column's order
    async fn delete(&self, id: String) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction().map_err(|e| DomainError::Internal(e.to_string()))?;

        let sql = format!("SELECT {} FROM cards WHERE id = ?", CARD_COLUMNS);
        let card = query_cards(&tx, &sql, params![id])?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound(format!("Card {} not found", id)))?;

        tx.execute("DELETE FROM cards WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Some(mut column) = fetch_column(&tx, &card.column_id)? {
            column.card_order_ids.retain(|c| *c != id);
            tx.execute(
                "UPDATE columns SET card_order_ids = ?, updated_at = ? WHERE id = ?",
                params![encode_ids(&column.card_order_ids)?, now_millis(), column.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        }

        tx.commit().map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Live cards of a board in storage order
pub(crate) fn fetch_board_cards(conn: &Connection, board_id: &str) -> DomainResult<Vec<Card>> {
    let sql = format!("SELECT {} FROM cards WHERE board_id = ? AND destroyed = 0", CARD_COLUMNS);
    query_cards(conn, &sql, params![board_id])
}

fn query_cards(conn: &Connection, sql: &str, args: &[&dyn rusqlite::ToSql]) -> DomainResult<Vec<Card>> {
    let mut stmt = conn.prepare(sql).map_err(|e| DomainError::Internal(e.to_string()))?;
    let mut rows = stmt.query(args).map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut cards = Vec::new();
    while let Some(row) = rows.next().map_err(|e| DomainError::Internal(e.to_string()))? {
        cards.push(row_to_card(row)?);
    }
    Ok(cards)
}

/// Convert a database row to Card
fn row_to_card(row: &rusqlite::Row) -> DomainResult<Card> {
    Ok(Card {
        id: row.get(0).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        board_id: row.get(1).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        column_id: row.get(2).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        title: row.get(3).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        description: row.get::<_, Option<String>>(4).unwrap_or(None),
        created_at: row.get(5).map_err(|e: rusqlite::Error| DomainError::Internal(e.to_string()))?,
        updated_at: row.get::<_, Option<i64>>(6).unwrap_or(None),
        destroyed: row.get::<_, bool>(7).unwrap_or(false),
    })
}
