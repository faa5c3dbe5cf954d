//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{ARROW_LEFT, PACKAGE, POWER, RECEIPT, SIGN_OUT, USERS};

use crate::models::{ActionName, Control};

/// Icon shown for an action.
pub fn action_icon(name: ActionName) -> &'static str {
    match name {
        ActionName::ManageUsers => USERS,
        ActionName::ViewInventory => PACKAGE,
        ActionName::ViewOrders => RECEIPT,
        ActionName::Back => ARROW_LEFT,
        ActionName::Logout => SIGN_OUT,
        ActionName::Quit => POWER,
    }
}

/// Render a clickable card for a dashboard control.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn control_card(ui: &mut Ui, control: &Control, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        let scale = size.x / 200.0;
        let text_color = if control.action.destructive {
            colors::WARNING
        } else {
            visuals.text_color()
        };

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        ui.painter().text(
            egui::pos2(rect.center().x, rect.top() + size.y * 0.3),
            egui::Align2::CENTER_CENTER,
            action_icon(control.action.name),
            egui::FontId::proportional(36.0 * scale),
            text_color,
        );
        ui.painter().text(
            egui::pos2(rect.center().x, rect.bottom() - size.y * 0.25),
            egui::Align2::CENTER_CENTER,
            control.label(),
            egui::FontId::proportional(18.0 * scale),
            text_color,
        );
    }

    response
}

/// Render a control as a plain button with its icon.
pub fn control_button(ui: &mut Ui, control: &Control) -> bool {
    let text = format!("{} {}", action_icon(control.action.name), control.label());
    ui.button(RichText::new(text).size(14.0)).clicked()
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}
