//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! No storage or transport dependencies.

mod entity;
mod object_id;
mod board;
mod column;
mod card;
pub mod validation;

pub use entity::{now_millis, DomainError, DomainResult, Entity};
pub use object_id::{is_object_id, new_object_id};
pub use board::{slugify, Board, BoardDetails, BoardType, ColumnDetails};
pub use column::Column;
pub use card::Card;
