//! Common rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// Result of rendering a modal frame, containing layout information.
pub struct ModalFrame {
    /// The layout chunks for content placement
    pub chunks: Rc<[Rect]>,
}

/// Render a standard modal frame with title, border, and layout.
///
/// Centers the modal, clears the background behind it, draws the titled
/// border and splits the inner area vertically by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

/// Builder for modal help text with consistent styling.
///
/// Keys are colored, descriptions are plain text.
pub struct HelpText {
    items: Vec<(String, Color, String)>,
    separator: String,
}

impl HelpText {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            separator: "  ".to_string(),
        }
    }

    /// Add a key-description pair.
    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    fn spans(self) -> Vec<Span<'static>> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(self.separator.clone()));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        spans
    }

    /// Build the help text into a Paragraph widget.
    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(Line::from(self.spans()))
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_spans() {
        let spans = HelpText::new()
            .key("[Enter]", Color::Green, "Confirm")
            .key("[Esc]", Color::Yellow, "Cancel")
            .spans();

        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[Enter] Confirm  [Esc] Cancel");
    }
}
