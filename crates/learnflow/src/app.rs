use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, status_bar::StatusBar, title_bar::TitleBar,
};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::domains::DomainsScreen;
use crate::state::{AppState, LaunchOptions, ModalState};

pub struct App {
    state: AppState,
    title_bar: TitleBar,
    status_bar: StatusBar,
    domains_screen: DomainsScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create app with a data directory path
    /// Files that can't be loaded fall back one by one, see [`AppState::load_from_data_dir`]
    pub fn with_data_dir(data_dir: PathBuf, options: LaunchOptions) -> Self {
        Self::with_state(AppState::load_from_data_dir(data_dir, &options))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            state,
            title_bar: TitleBar::new(),
            status_bar: StatusBar::new(),
            domains_screen: DomainsScreen::new(),
        }
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        if !self.state.completed {
            tracing::info!(
                selected = self.state.model.selected_count(),
                "Exiting without finishing"
            );
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.title_bar.render(frame, chunks[0], &self.state);
        self.domains_screen.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);

        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if !matches!(self.state.modal, ModalState::None) {
            if handle_modal_key(key_event, &mut self.state) == ModalResult::Dismissed {
                self.state.modal = ModalState::None;
                // Nothing left to do once the account is created
                if self.state.completed {
                    self.state.exit = true;
                }
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('f') if key_event.modifiers.is_empty() => {
                self.state.finish_and_report();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.domains_screen.handle_key(key_event, &mut self.state);
        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
