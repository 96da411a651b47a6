//! Collapsible category header for the domain list.
//!
//! Renders a category row with an expand indicator and maps the
//! expand/collapse keys to an action. The expansion state itself lives in the
//! model.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, SELECTED_COLOR};

/// What an expand/collapse key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseAction {
    Expand,
    Collapse,
}

/// Configuration for rendering a category header row
pub struct CategoryHeader<'a> {
    title: &'a str,
    expanded: bool,
    focused: bool,
    selected: usize,
    total: usize,
}

impl<'a> CategoryHeader<'a> {
    pub fn new(title: &'a str, expanded: bool) -> Self {
        Self {
            title,
            expanded,
            focused: false,
            selected: 0,
            total: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Selected and total domain counts shown after the title
    pub fn counts(mut self, selected: usize, total: usize) -> Self {
        self.selected = selected;
        self.total = total;
        self
    }

    pub fn indicator(&self) -> &'static str {
        if self.expanded { "[-]" } else { "[+]" }
    }

    /// Render the header as a single list line
    pub fn line(&self) -> Line<'a> {
        let title_style = if self.focused {
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD)
        };

        let count_color = if self.selected > 0 {
            SELECTED_COLOR
        } else {
            HELP_COLOR
        };

        let mut spans = vec![
            Span::styled(
                format!("{} ", self.indicator()),
                Style::default().fg(HELP_COLOR),
            ),
            Span::styled(self.title, title_style),
            Span::styled(
                format!(" ({}/{})", self.selected, self.total),
                Style::default().fg(count_color),
            ),
        ];

        if self.total == 0 {
            spans.push(Span::styled(" (empty)", Style::default().fg(HELP_COLOR)));
        }

        Line::from(spans)
    }

    /// Check if a key should expand or collapse the category
    /// Returns None if the key is not a collapse key
    pub fn handle_collapse_key(key: char) -> Option<CollapseAction> {
        match key {
            '-' | '_' | 'h' => Some(CollapseAction::Collapse),
            '+' | '=' | 'l' => Some(CollapseAction::Expand),
            _ => None,
        }
    }
}
