//! Kanban Board Backend
//!
//! Layered architecture:
//! - domain: Core entities, ids, and request validation
//! - repository: Data access abstractions and SQLite implementations
//! - commands: HTTP handlers
//! - routes: Router assembly

use std::sync::Arc;

pub mod domain;
pub mod repository;
mod commands;
mod error;

pub mod config;
pub mod routes;

use config::ServerConfig;
use repository::{init_db, BoardRepository, CardRepository, ColumnRepository, SharedConnection};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub board_repo: Arc<BoardRepository>,
    pub column_repo: Arc<ColumnRepository>,
    pub card_repo: Arc<CardRepository>,
}

impl AppState {
    pub fn new(conn: SharedConnection) -> Self {
        Self {
            board_repo: Arc::new(BoardRepository::new(conn.clone())),
            column_repo: Arc::new(ColumnRepository::new(conn.clone())),
            card_repo: Arc::new(CardRepository::new(conn)),
        }
    }
}

/// Load configuration, open the database, and serve until shutdown
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();
    let config = ServerConfig::from_env();

    // Flushes buffered log lines when dropped at shutdown
    let _log_guard = rolling_logger::init_logger(&config.log_dir, "KanbanBoard")?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let db_state = init_db(&config.database_path).await?;
    tracing::info!("Database ready at {}", config.database_path.display());

    let app = routes::create_router(AppState::new(db_state.connection()), config.cors_layer());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {} ({:?} mode)", addr, config.build_mode);
    axum::serve(listener, app).await?;

    Ok(())
}
