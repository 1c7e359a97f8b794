//! Reusable egui widget components for the Hangman game screen.
//!
//! - **Buttons**: filled action buttons with an enabled/disabled state
//! - **Input**: the single-letter guess entry
//! - **Frames**: dialog frames and the modal backdrop
//! - **Layout**: separators and text helpers

pub mod buttons;
pub mod frames;
pub mod input;
pub mod layout;

pub use buttons::{ActionButton, ActionButtonStyle};
pub use frames::{dialog_frame, modal_backdrop};
pub use input::LetterInput;
pub use layout::{centered_label, separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Height of action buttons
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Width of the letter entry
    pub const INPUT_WIDTH: f32 = 64.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Dialog corner radius
    pub const DIALOG_RADIUS: u8 = 12;
    /// Dialog width
    pub const DIALOG_WIDTH: f32 = 320.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Heading and body text (#333)
    pub const TEXT: Color32 = Color32::from_rgb(51, 51, 51);
    /// Border color (#ccc)
    pub const BORDER: Color32 = Color32::from_rgb(204, 204, 204);
    /// Guess button (#4caf50)
    pub const GREEN: Color32 = Color32::from_rgb(76, 175, 80);
    /// Restart button (#2196f3)
    pub const BLUE: Color32 = Color32::from_rgb(33, 150, 243);
    /// Attempts label and loss accents
    pub const RED: Color32 = Color32::from_rgb(220, 38, 38);
    /// Warning accent
    pub const AMBER: Color32 = Color32::from_rgb(245, 158, 11);
    /// Disabled button fill
    pub const DISABLED_BG: Color32 = Color32::from_rgb(210, 210, 210);
    /// Disabled button text
    pub const DISABLED_TEXT: Color32 = Color32::from_rgb(150, 150, 150);
}
