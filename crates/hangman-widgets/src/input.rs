//! The single-letter guess entry.

use egui::{Align, FontId, TextEdit, Ui};

use crate::{sizing, theme};

/// A narrow, centered text entry for one letter.
///
/// The entry does not cap its length; validation happens when the guess is
/// submitted so that malformed input can be reported.
pub struct LetterInput<'a> {
    text: &'a mut String,
    enabled: bool,
    keep_focus: bool,
    font_size: f32,
}

impl<'a> LetterInput<'a> {
    pub fn new(text: &'a mut String) -> Self {
        Self {
            text,
            enabled: true,
            keep_focus: false,
            font_size: 18.0,
        }
    }

    /// Set whether the entry accepts typing.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Grab keyboard focus whenever nothing else holds it.
    pub fn keep_focus(mut self, keep_focus: bool) -> Self {
        self.keep_focus = keep_focus;
        self
    }

    /// Show the entry and return true if Enter was pressed inside it.
    pub fn show(self, ui: &mut Ui) -> bool {
        let edit = TextEdit::singleline(self.text)
            .font(FontId::proportional(self.font_size))
            .horizontal_align(Align::Center)
            .text_color(theme::TEXT)
            .desired_width(sizing::INPUT_WIDTH);

        let response = ui.add_enabled(self.enabled, edit);

        let submitted = self.enabled
            && response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let nothing_focused = ui.memory(|m| m.focused().is_none());
        if self.enabled && self.keep_focus && (submitted || nothing_focused) {
            response.request_focus();
        }

        submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Event, Modifiers, RawInput};

    fn key_enter() -> Event {
        Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run one frame with the entry and return whether it submitted.
    fn frame(ctx: &Context, text: &mut String, enabled: bool, events: Vec<Event>) -> bool {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let mut submitted = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                submitted = LetterInput::new(text)
                    .enabled(enabled)
                    .keep_focus(enabled)
                    .show(ui);
            });
        });
        submitted
    }

    #[test]
    fn test_enter_submits_and_keeps_focus() {
        let ctx = Context::default();
        let mut text = String::new();

        // First frame takes focus, then the letter and Enter arrive.
        assert!(!frame(&ctx, &mut text, true, vec![]));
        assert!(ctx.memory(|m| m.focused().is_some()));
        assert!(!frame(&ctx, &mut text, true, vec![Event::Text("q".into())]));
        assert_eq!(text, "q");
        assert!(frame(&ctx, &mut text, true, vec![key_enter()]));
        assert!(ctx.memory(|m| m.focused().is_some()));

        // Focus came back, so the next letter lands in the entry too.
        text.clear();
        assert!(!frame(&ctx, &mut text, true, vec![Event::Text("r".into())]));
        assert_eq!(text, "r");
        assert!(frame(&ctx, &mut text, true, vec![key_enter()]));
    }

    #[test]
    fn test_typing_without_enter_does_not_submit() {
        let ctx = Context::default();
        let mut text = String::new();
        frame(&ctx, &mut text, true, vec![]);
        assert!(!frame(&ctx, &mut text, true, vec![Event::Text("ab".into())]));
        assert_eq!(text, "ab");
    }

    #[test]
    fn test_disabled_entry_never_submits() {
        let ctx = Context::default();
        let mut text = String::new();
        assert!(!frame(&ctx, &mut text, false, vec![]));
        assert!(!frame(&ctx, &mut text, false, vec![Event::Text("q".into())]));
        assert!(!frame(&ctx, &mut text, false, vec![key_enter()]));
        assert!(text.is_empty());
        assert!(ctx.memory(|m| m.focused().is_none()));
    }
}
