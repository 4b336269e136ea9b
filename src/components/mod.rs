//! UI Components
//!
//! Leptos components for the board view.

mod board_tab_bar;
mod board_content;
mod column_view;
mod card_view;
mod new_column_form;
mod new_card_form;
mod delete_confirm_button;

pub use board_tab_bar::BoardTabBar;
pub use board_content::BoardContent;
pub use column_view::ColumnView;
pub use card_view::CardView;
pub use new_column_form::NewColumnForm;
pub use new_card_form::NewCardForm;
pub use delete_confirm_button::DeleteConfirmButton;
