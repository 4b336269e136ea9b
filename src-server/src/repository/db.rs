//! Database Connection and Setup
//!
//! Manages the SQLite connection, migrations, and the JSON encoding of
//! order arrays.

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared connection handle
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
pub struct DbState {
    conn: SharedConnection,
}

impl DbState {
    /// Connection handle for repositories
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

/// Initialize database with path (`:memory:` for an in-memory database)
pub async fn init_db(db_path: &PathBuf) -> Result<DbState, String> {
    let conn = Connection::open(db_path).map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    Ok(DbState {
        conn: Arc::new(Mutex::new(Some(conn))),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS boards (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT NOT NULL,
            description TEXT NOT NULL,
            board_type TEXT NOT NULL DEFAULT 'public',
            column_order_ids TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER NOT NULL,
            updated_at INTEGER,
            destroyed INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS columns (
            id TEXT PRIMARY KEY,
            board_id TEXT NOT NULL,
            title TEXT NOT NULL,
            card_order_ids TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER NOT NULL,
            updated_at INTEGER,
            destroyed INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS cards (
            id TEXT PRIMARY KEY,
            board_id TEXT NOT NULL,
            column_id TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER,
            destroyed INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_columns_board ON columns(board_id);
        CREATE INDEX IF NOT EXISTS idx_cards_column ON cards(column_id);",
    )
    .map_err(|e| format!("Migration failed: {}", e))
}

/// Error for a connection that was never opened
pub(crate) fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

pub(crate) fn encode_ids(ids: &[String]) -> DomainResult<String> {
    serde_json::to_string(ids).map_err(|e| DomainError::Internal(e.to_string()))
}

pub(crate) fn decode_ids(raw: &str) -> DomainResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|e| DomainError::Internal(format!("Corrupt order array: {}", e)))
}
