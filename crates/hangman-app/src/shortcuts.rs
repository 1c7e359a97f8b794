//! Keyboard shortcut registry and documentation.

use winit::keyboard::{Key, ModifiersState, NamedKey};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+R").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Commands reachable from the keyboard outside of egui widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCommand {
    Restart,
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Enter", false, false, "Submit guess"),
            Shortcut::new("Enter", false, false, "Close notice"),
            Shortcut::new("Escape", false, false, "Close notice"),
            Shortcut::new("R", true, false, "Play again (when the round is over)"),
            Shortcut::new("F5", false, false, "Play again (when the round is over)"),
        ]
    }

    /// Log all shortcuts.
    pub fn log_all() {
        let list = Self::all()
            .iter()
            .map(|s| format!("{}={}", s.format(), s.description))
            .collect::<Vec<_>>()
            .join(", ");
        log::info!("Keyboard shortcuts: {}", list);
    }

    /// Match a key press handled by the window rather than by egui.
    pub fn command_for(key: &Key, modifiers: ModifiersState) -> Option<ShortcutCommand> {
        let ctrl = modifiers.control_key() || modifiers.super_key();
        match key {
            Key::Character(c) if ctrl && c.eq_ignore_ascii_case("r") => {
                Some(ShortcutCommand::Restart)
            }
            Key::Named(NamedKey::F5) => Some(ShortcutCommand::Restart),
            _ => None,
        }
    }
}
