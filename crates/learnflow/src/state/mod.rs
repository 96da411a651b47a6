mod app_state;
mod errors;
mod gate;
mod modal;

// Re-export all types from submodules
pub use app_state::*;
pub use errors::*;
pub use gate::*;
pub use modal::*;
