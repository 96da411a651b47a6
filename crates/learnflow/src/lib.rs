//! Terminal front-end for the learnflow domain picker
//!
//! This crate hosts [`learnflow_core::ExpandableListModel`] in a small TUI that
//! plays the second step of sign-up:
//! - Browse categories and expand them to reveal learning domains
//! - Select domains until the minimum is reached
//! - Save the chosen domains to the data directory
//!
//! Catalogs, the minimum, and the saved selection live as YAML files under
//! `~/.learnflow/` by default.

pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
pub use state::{AppState, LaunchOptions, SelectionGate};
