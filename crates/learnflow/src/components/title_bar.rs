use super::{Component, EventResult};
use crate::state::{AppState, CatalogSource};
use crate::util::styles::{HELP_COLOR, progress_color};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Top bar: screen title, catalog source, and selection progress
pub struct TitleBar;

impl TitleBar {
    pub fn new() -> Self {
        Self
    }

    fn progress_text(state: &AppState) -> String {
        let selected = state.model.selected_count();
        let minimum = state.gate.minimum();
        match state.gate.remaining(selected) {
            0 => format!("{} selected", selected),
            remaining => format!("{}/{} selected ({} more)", selected, minimum, remaining),
        }
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TitleBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let source = match &state.catalog_source {
            CatalogSource::Seed => "built-in catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        };
        let selected = state.model.selected_count();

        let line = Line::from(vec![
            Span::styled(
                "learnflow",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | Choose your learning domains "),
            Span::styled(format!("[{}]", source), Style::default().fg(HELP_COLOR)),
            Span::raw("  "),
            Span::styled(
                Self::progress_text(state),
                Style::default().fg(progress_color(selected, state.gate.minimum())),
            ),
        ]);

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(paragraph, area);
    }
}
