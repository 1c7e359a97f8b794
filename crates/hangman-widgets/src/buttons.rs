//! Button components: filled action buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Ui, vec2};

use crate::{sizing, theme};

/// Style configuration for action buttons.
#[derive(Clone)]
pub struct ActionButtonStyle {
    /// Fill when enabled
    pub fill: Color32,
    /// Text color when enabled
    pub text_color: Color32,
    /// Font size
    pub font_size: f32,
    /// Button height
    pub height: f32,
    /// Horizontal padding around the label
    pub padding: f32,
}

impl Default for ActionButtonStyle {
    fn default() -> Self {
        Self {
            fill: Color32::from_gray(235),
            text_color: theme::TEXT,
            font_size: 14.0,
            height: sizing::BUTTON_HEIGHT,
            padding: 16.0,
        }
    }
}

impl ActionButtonStyle {
    /// Solid colored button with white text.
    pub fn solid(fill: Color32) -> Self {
        Self {
            fill,
            text_color: Color32::WHITE,
            ..Default::default()
        }
    }
}

/// A filled text button that can be disabled.
pub struct ActionButton<'a> {
    label: &'a str,
    enabled: bool,
    min_width: Option<f32>,
    style: ActionButtonStyle,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            min_width: None,
            style: ActionButtonStyle::default(),
        }
    }

    /// Green "go" button.
    pub fn primary(label: &'a str) -> Self {
        Self::new(label).style(ActionButtonStyle::solid(theme::GREEN))
    }

    /// Blue secondary action.
    pub fn secondary(label: &'a str) -> Self {
        Self::new(label).style(ActionButtonStyle::solid(theme::BLUE))
    }

    /// Set the button style.
    pub fn style(mut self, style: ActionButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set whether the button reacts to clicks.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked while enabled.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.style.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let text_width = galley.size().x + self.style.padding * 2.0;
        let width = self.min_width.unwrap_or(0.0).max(text_width);

        let sense = if self.enabled { Sense::click() } else { Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.style.height), sense);

        if ui.is_rect_visible(rect) {
            let (fill, text_color) = if !self.enabled {
                (theme::DISABLED_BG, theme::DISABLED_TEXT)
            } else if response.hovered() {
                (self.style.fill.gamma_multiply(0.9), self.style.text_color)
            } else {
                (self.style.fill, self.style.text_color)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = self.enabled && response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Event, Modifiers, Pos2, RawInput};

    fn press(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run one frame with a button, returning where it starts and whether it was clicked.
    fn frame(ctx: &Context, enabled: bool, events: Vec<Event>) -> (Pos2, bool) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let mut origin = Pos2::ZERO;
        let mut clicked = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                origin = ui.cursor().min;
                clicked = ActionButton::primary("Guess").enabled(enabled).show(ui);
            });
        });
        (origin, clicked)
    }

    /// Lay the button out, then press and release inside it.
    fn click(enabled: bool) -> bool {
        let ctx = Context::default();
        let (origin, _) = frame(&ctx, enabled, vec![]);
        let pos = origin + vec2(8.0, 8.0);
        let (_, pressed) = frame(&ctx, enabled, vec![Event::PointerMoved(pos), press(pos, true)]);
        let (_, released) = frame(&ctx, enabled, vec![press(pos, false)]);
        pressed || released
    }

    #[test]
    fn test_enabled_button_reports_click() {
        assert!(click(true));
    }

    #[test]
    fn test_disabled_button_never_reports_click() {
        assert!(!click(false));
    }

    #[test]
    fn test_min_width_is_respected() {
        let ctx = Context::default();
        let mut width = 0.0;
        let _ = ctx.run(RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let before = ui.cursor().min.x;
                ui.horizontal(|ui| {
                    ActionButton::new("OK").min_width(120.0).show(ui);
                    width = ui.min_rect().max.x - before;
                });
            });
        });
        assert!(width >= 120.0);
    }
}
