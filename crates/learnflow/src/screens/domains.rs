//! The domain picker: categories with their domains underneath.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use learnflow_core::FlatRow;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::collapsible::{CategoryHeader, CollapseAction};
use crate::components::lists::{calculate_centered_scroll, handle_list_jump, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, SELECTED_COLOR, focused_block_with_help};

use super::Screen;

const HELP_TEXT: &str = "[Enter/Space] Toggle  [+/-] Expand/Collapse  [E/C] All";

pub struct DomainsScreen;

impl DomainsScreen {
    pub fn new() -> Self {
        Self
    }

    fn row_line<'a>(row: &FlatRow<'a>, is_cursor: bool) -> Line<'a> {
        let prefix = if is_cursor { "> " } else { "  " };

        match *row {
            FlatRow::Category { category, .. } => {
                let mut line = CategoryHeader::new(category.title(), category.is_expanded())
                    .focused(is_cursor)
                    .counts(category.selected_count(), category.domains().len())
                    .line();
                line.spans.insert(0, Span::raw(prefix));
                line
            }
            FlatRow::Domain { domain, .. } => {
                let (check, check_color) = if domain.is_selected() {
                    ("[x] ", SELECTED_COLOR)
                } else {
                    ("[ ] ", HELP_COLOR)
                };
                let name_style = if is_cursor {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                let mut spans = vec![
                    Span::raw(prefix),
                    Span::raw("    "),
                    Span::styled(check, Style::default().fg(check_color)),
                    Span::styled(domain.name(), name_style),
                ];
                if let Some(description) = domain.description() {
                    spans.push(Span::styled(
                        format!("  {}", description),
                        Style::default().fg(HELP_COLOR),
                    ));
                }
                Line::from(spans)
            }
        }
    }

    fn render_rows(frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = state.model.flatten();
        let visible_count = area.height as usize;
        let cursor = state.picker.cursor;
        let scroll_offset = calculate_centered_scroll(cursor, rows.len(), visible_count);

        let mut lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_count)
            .map(|(idx, row)| Self::row_line(row, idx == cursor))
            .collect();

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No categories to choose from.",
                Style::default().fg(HELP_COLOR),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for DomainsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DomainsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let total = state.model.row_count();
        if handle_list_navigation(&key, &mut state.picker.cursor, total)
            || handle_list_jump(&key, &mut state.picker.cursor, total)
        {
            return EventResult::Handled;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.activate_cursor();
                EventResult::Handled
            }
            KeyCode::Right => {
                state.set_cursor_category_expanded(true);
                EventResult::Handled
            }
            KeyCode::Left => {
                state.set_cursor_category_expanded(false);
                EventResult::Handled
            }
            KeyCode::Char('E') => {
                state.expand_all();
                EventResult::Handled
            }
            KeyCode::Char('C') => {
                state.collapse_all();
                EventResult::Handled
            }
            KeyCode::Char(c) => match CategoryHeader::handle_collapse_key(c) {
                Some(CollapseAction::Expand) => {
                    state.set_cursor_category_expanded(true);
                    EventResult::Handled
                }
                Some(CollapseAction::Collapse) => {
                    state.set_cursor_category_expanded(false);
                    EventResult::Handled
                }
                None => EventResult::NotHandled,
            },
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(" {} ", self.title().to_uppercase());
        let block = focused_block_with_help(&title, true, HELP_TEXT);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        Self::render_rows(frame, inner, state);
    }
}

impl Screen for DomainsScreen {
    fn title(&self) -> &str {
        "Domains"
    }
}
