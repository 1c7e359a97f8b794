//! Hangman Application
//!
//! The desktop shell: windowing, keyboard shortcuts, the egui screen and
//! the Vello pass that draws the gallows underneath it.

mod app;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use shortcuts::{Shortcut, ShortcutCommand, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
