//! Cursor movement and scrolling helpers for row lists.

mod row_cursor;

pub use row_cursor::{calculate_centered_scroll, handle_list_jump, handle_list_navigation};
