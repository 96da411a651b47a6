//! Cursor movement over a flat list of rows.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Calculate centered scroll offset for a list.
///
/// Returns the scroll offset that keeps the cursor row centered when possible,
/// while handling edge cases near the beginning and end of the list.
///
/// # Arguments
/// * `cursor` - The row under the cursor
/// * `total_rows` - Total number of rows in the list
/// * `visible_count` - Number of rows visible in the viewport
pub fn calculate_centered_scroll(cursor: usize, total_rows: usize, visible_count: usize) -> usize {
    if total_rows <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if cursor <= center {
        0
    } else if cursor >= total_rows.saturating_sub(visible_count.saturating_sub(center)) {
        total_rows.saturating_sub(visible_count)
    } else {
        cursor.saturating_sub(center)
    }
}

/// Handle j/k or Up/Down list navigation.
///
/// Moves the cursor up or down with wrapping at boundaries.
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(key: &KeyEvent, cursor: &mut usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }

    if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *cursor = (*cursor + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *cursor = if *cursor == 0 { total - 1 } else { *cursor - 1 };
            true
        }
        _ => false,
    }
}

/// Handle Home/End and g/G jumps to the first or last row.
pub fn handle_list_jump(key: &KeyEvent, cursor: &mut usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }

    match key.code {
        KeyCode::Home | KeyCode::Char('g') => {
            *cursor = 0;
            true
        }
        KeyCode::End | KeyCode::Char('G') => {
            *cursor = total - 1;
            true
        }
        _ => false,
    }
}
