//! Board Drag-and-Drop
//!
//! - collision: drop target resolution per frame
//! - moves: value-level column/card moves
//! - session: the gesture state machine

mod collision;
mod moves;
mod session;

pub use collision::{resolve_card_target, resolve_column_target};
pub use moves::{find_column_by_card_id, find_target_column, insertion_index, move_card_between_columns};
pub use session::{ActiveItem, BoardDnd, DragSession, DragState, DropOutcome, OverTarget};

/// DOM attribute carrying a droppable's id
pub const DROPPABLE_ATTR: &str = "data-droppable-id";
