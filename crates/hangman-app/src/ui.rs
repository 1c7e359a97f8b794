//! UI components using egui.

use egui::{Align2, Color32, Context, Frame, RichText, Sense, Vec2};
use hangman_core::{CANVAS_SIZE, GameView, Notice, NoticeKind, Outcome};
use hangman_widgets::{
    ActionButton, LetterInput, centered_label, dialog_frame, modal_backdrop, separator, sizing,
    theme,
};

/// Width of the guess button.
const GUESS_BUTTON_WIDTH: f32 = 80.0;
/// Gap between the entry and the guess button.
const INPUT_ROW_GAP: f32 = 8.0;

/// UI state mirrored from the controller plus widget-local state.
pub struct UiState {
    /// Latest view of the game.
    pub view: GameView,
    /// Text typed into the letter entry.
    pub guess_input: String,
    /// Modal notice currently shown, if any.
    pub notice: Option<Notice>,
    /// Where the gallows canvas was laid out this frame, in points.
    pub canvas_rect: Option<egui::Rect>,
}

impl UiState {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            guess_input: String::new(),
            notice: None,
            canvas_rect: None,
        }
    }

    /// Whether the game screen should react to input.
    pub fn accepts_guesses(&self) -> bool {
        self.view.input_enabled && self.notice.is_none()
    }

    pub fn can_restart(&self) -> bool {
        self.view.restart_enabled && self.notice.is_none()
    }

    /// Mirror a dispatch outcome into the screen state.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        if outcome.clear_input {
            self.guess_input.clear();
        }
        if outcome.notice.is_some() {
            self.notice = outcome.notice;
        }
        self.view = outcome.view;
    }
}

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Submit the text in the letter entry.
    SubmitGuess(String),
    /// Start a new round.
    Restart,
    /// Close the open notice.
    DismissNotice,
}

/// Render all UI and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let game_action = render_game_screen(ctx, ui_state);
    let notice_action = ui_state
        .notice
        .as_ref()
        .and_then(|notice| render_notice(ctx, notice));

    // A notice is modal, so it wins over anything behind it.
    notice_action.or(game_action)
}

/// Render the heading, canvas slot, word, input row and labels.
fn render_game_screen(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;
    let accepts_guesses = ui_state.accepts_guesses();
    let can_restart = ui_state.can_restart();

    // Transparent so the Vello layer (background and gallows) shows through.
    egui::CentralPanel::default()
        .frame(Frame::NONE)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("🎯 Hangman")
                        .size(30.0)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.add_space(10.0);

                // The gallows itself is drawn by the renderer into this slot.
                let side = CANVAS_SIZE as f32;
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
                ui_state.canvas_rect = Some(rect);
                ui.add_space(10.0);

                ui.label(
                    RichText::new(&ui_state.view.word)
                        .size(24.0)
                        .monospace()
                        .strong()
                        .color(theme::TEXT),
                );
                ui.add_space(10.0);
            });

            let row_width = sizing::INPUT_WIDTH + INPUT_ROW_GAP + GUESS_BUTTON_WIDTH;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                let submitted = LetterInput::new(&mut ui_state.guess_input)
                    .enabled(accepts_guesses)
                    .keep_focus(accepts_guesses)
                    .show(ui);
                ui.add_space(INPUT_ROW_GAP);
                let clicked = ActionButton::primary("Guess")
                    .min_width(GUESS_BUTTON_WIDTH)
                    .enabled(accepts_guesses)
                    .show(ui);

                if accepts_guesses && (submitted || clicked) {
                    action = Some(UiAction::SubmitGuess(ui_state.guess_input.clone()));
                }
            });

            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(RichText::new(&ui_state.view.status).size(16.0).color(theme::RED));
                ui.add_space(5.0);
                ui.label(
                    RichText::new(&ui_state.view.guessed)
                        .size(14.0)
                        .color(theme::TEXT),
                );
                ui.add_space(10.0);

                if ActionButton::secondary("🔁 Play Again")
                    .enabled(can_restart)
                    .show(ui)
                {
                    action = Some(UiAction::Restart);
                }
            });
        });

    action
}

/// Accent color for a notice kind.
fn notice_color(kind: NoticeKind) -> Color32 {
    match kind {
        NoticeKind::Warning => theme::AMBER,
        NoticeKind::Info => theme::BLUE,
        NoticeKind::Won => theme::GREEN,
        NoticeKind::Lost => theme::RED,
    }
}

/// Render a modal notice. Enter, Escape or OK close it.
fn render_notice(ctx: &Context, notice: &Notice) -> Option<UiAction> {
    let mut action = None;

    // The backdrop only blocks; it does not dismiss.
    modal_backdrop(ctx, "notice_backdrop");

    egui::Area::new(egui::Id::new("notice_dialog"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            dialog_frame().show(ui, |ui| {
                ui.set_width(sizing::DIALOG_WIDTH);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&notice.title)
                            .size(16.0)
                            .strong()
                            .color(notice_color(notice.kind)),
                    );
                    ui.add_space(8.0);
                    separator(ui);
                    centered_label(
                        ui,
                        RichText::new(&notice.message).size(14.0).color(theme::TEXT),
                    );
                    ui.add_space(16.0);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ActionButton::primary("OK").min_width(72.0).show(ui) {
                            action = Some(UiAction::DismissNotice);
                        }
                    });
                });
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        action = Some(UiAction::DismissNotice);
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_core::{Controller, GameEvent, WordList};

    fn state_for(word: &str) -> (Controller, UiState) {
        let controller = Controller::seeded(WordList::default(), 0)
            .with_word(word)
            .unwrap();
        let ui_state = UiState::new(controller.view());
        (controller, ui_state)
    }

    #[test]
    fn test_accepts_guesses_while_playing() {
        let (_, ui_state) = state_for("cat");
        assert!(ui_state.accepts_guesses());
        assert!(!ui_state.can_restart());
    }

    #[test]
    fn test_malformed_guess_keeps_input() {
        let (mut controller, mut ui_state) = state_for("cat");
        ui_state.guess_input = "7".to_string();
        let outcome = controller.dispatch(GameEvent::SubmitGuess(ui_state.guess_input.clone()));
        ui_state.apply_outcome(outcome);
        assert_eq!(ui_state.guess_input, "7");
        assert_eq!(ui_state.notice.as_ref().unwrap().title, "Invalid Input");
        assert!(!ui_state.accepts_guesses());
    }

    #[test]
    fn test_accepted_guess_clears_input() {
        let (mut controller, mut ui_state) = state_for("cat");
        ui_state.guess_input = "c".to_string();
        let outcome = controller.dispatch(GameEvent::SubmitGuess(ui_state.guess_input.clone()));
        ui_state.apply_outcome(outcome);
        assert!(ui_state.guess_input.is_empty());
        assert!(ui_state.notice.is_none());
        assert_eq!(ui_state.view.word, "c _ _");
    }

    #[test]
    fn test_restart_enabled_after_loss_notice_dismissed() {
        let (mut controller, mut ui_state) = state_for("cat");
        for letter in ["x", "y", "z", "q", "w", "e"] {
            let outcome = controller.dispatch(GameEvent::SubmitGuess(letter.to_string()));
            ui_state.apply_outcome(outcome);
        }
        assert_eq!(ui_state.notice.as_ref().unwrap().kind, NoticeKind::Lost);
        assert!(!ui_state.can_restart());

        ui_state.notice = None;
        assert!(ui_state.can_restart());
        assert!(!ui_state.accepts_guesses());
    }

    #[test]
    fn test_render_ui_runs_headless() {
        let (_, mut ui_state) = state_for("penguin");
        let ctx = Context::default();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = render_ui(ctx, &mut ui_state);
        });
        assert!(action.is_none());
        let rect = ui_state.canvas_rect.unwrap();
        assert!((rect.width() - CANVAS_SIZE as f32).abs() < 1.0);
        assert!((rect.height() - CANVAS_SIZE as f32).abs() < 1.0);
    }

    #[test]
    fn test_escape_dismisses_notice() {
        let (mut controller, mut ui_state) = state_for("cat");
        ui_state.notice = controller
            .dispatch(GameEvent::SubmitGuess(String::new()))
            .notice;

        let ctx = Context::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        let mut action = None;
        let _ = ctx.run(input, |ctx| {
            action = render_ui(ctx, &mut ui_state);
        });
        assert_eq!(action, Some(UiAction::DismissNotice));
    }
}
