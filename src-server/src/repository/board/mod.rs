//! Board Repository Module
//!
//! This module provides board repository functionality split into specialized sub-modules:
//! - board_repo: Core CRUD operations
//! - board_query: Paged listing and nested details
//! - board_ordering: Cross-column card moves

mod board_repo;
mod board_query;
mod board_ordering;

pub use board_repo::BoardRepository;
pub(crate) use board_repo::fetch_board;

// Re-export all operation traits so they can be used by importing BoardRepository
pub use board_query::{BoardPage, BoardQueryOperations};
pub use board_ordering::BoardOrderingOperations;
