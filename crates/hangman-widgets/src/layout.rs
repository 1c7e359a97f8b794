//! Layout helpers: separators and labels.

use egui::{Color32, RichText, Stroke, Ui};

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, Color32::from_gray(230)),
    );
    ui.add_space(8.0);
}

/// A label centered in the available width.
pub fn centered_label(ui: &mut Ui, text: RichText) {
    ui.vertical_centered(|ui| {
        ui.label(text);
    });
}
