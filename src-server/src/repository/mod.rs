//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
pub mod board;
mod column_repo;
mod card_repo;


pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection};
pub use board::{BoardOrderingOperations, BoardPage, BoardQueryOperations, BoardRepository};
pub use column_repo::ColumnRepository;
pub use card_repo::CardRepository;
