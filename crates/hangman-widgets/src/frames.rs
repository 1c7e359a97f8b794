//! Frame components: dialog frames and the modal backdrop.

use egui::{Color32, Context, CornerRadius, Frame, Margin, Pos2, Stroke};

use crate::{sizing, theme};

/// Create a dialog frame with shadow.
pub fn dialog_frame() -> Frame {
    Frame::new()
        .fill(Color32::WHITE)
        .corner_radius(CornerRadius::same(sizing::DIALOG_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 12,
            offset: [0, 4],
            color: Color32::from_black_alpha(30),
        })
        .inner_margin(Margin::same(20))
}

/// Dim the whole window behind a modal and swallow clicks on it.
pub fn modal_backdrop(ctx: &Context, id: &str) {
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let screen_rect = ctx.input(|i| i.content_rect());
            // Sensing clicks keeps them from reaching the game screen.
            ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter()
                .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(80));
        });
}
