//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod board_header;
mod create_list_button;
mod delete_confirm_button;
mod item_row;
mod list_tab_bar;
mod pros_cons_board;
mod score_panel;
mod side_column;
mod side_selector;
mod weight_picker;

pub use create_list_button::CreateListButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use list_tab_bar::ListTabBar;
pub use pros_cons_board::ProsConsBoard;
