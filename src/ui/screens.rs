//! Rendering for each screen type.
//!
//! Screens only draw the controls they were created with and report which
//! one was activated.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};

use super::app::{LogEntry, LogLevel};
use super::components::{colors, control_button, control_card, panel_header};
use super::host::ScreenView;
use crate::config::AccountConfig;
use crate::models::{ActionName, Control, IntentId, ScreenType};

/// What the user asked for on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenRequest {
    Intent(IntentId),
    /// Sign in with the account at this index.
    SignIn(usize),
}

/// Show the screen described by `view`.
pub fn show(
    ui: &mut Ui,
    view: &ScreenView,
    accounts: &[AccountConfig],
    activity: &[LogEntry],
) -> Option<ScreenRequest> {
    match view.descriptor.screen {
        ScreenType::Login => show_login(ui, view, accounts),
        s if s.is_dashboard() => show_dashboard(ui, view, activity),
        _ => show_sub_view(ui, view),
    }
}

fn show_login(ui: &mut Ui, view: &ScreenView, accounts: &[AccountConfig]) -> Option<ScreenRequest> {
    let mut request = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Stockdesk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Choose an account to continue").size(14.0).weak());
        ui.add_space(30.0);

        if accounts.is_empty() {
            ui.colored_label(colors::WARNING, "No accounts are configured.");
        }

        for (i, account) in accounts.iter().enumerate() {
            let text = format!("{}  ({})", account.display_name, account.role);
            if ui
                .add_sized([280.0, 32.0], egui::Button::new(RichText::new(text).size(15.0)))
                .clicked()
            {
                request = Some(ScreenRequest::SignIn(i));
            }
            ui.add_space(6.0);
        }

        ui.add_space(30.0);
        if let Some(intent) = show_controls(ui, &view.controls) {
            request = Some(ScreenRequest::Intent(intent));
        }
    });

    request
}

fn show_dashboard(ui: &mut Ui, view: &ScreenView, activity: &[LogEntry]) -> Option<ScreenRequest> {
    let mut request = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label(RichText::new(view.descriptor.screen.name()).size(28.0).strong());
        if let Some(session) = &view.session {
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("Signed in as {} ({})", session.display_name(), session.role()))
                    .size(14.0)
                    .weak(),
            );
        }
        ui.add_space(30.0);

        let cards: Vec<&Control> = view
            .controls
            .iter()
            .filter(|c| c.action.name != ActionName::Quit)
            .collect();
        let spacing = 24.0;
        let count = cards.len().max(1) as f32;
        let available = ui.available_width();
        let card_width = ((available - spacing * (count - 1.0)) / count).clamp(140.0, 220.0);
        let card_size = egui::vec2(card_width, card_width * 0.7);
        let total_width = card_width * count + spacing * (count - 1.0);

        ui.horizontal(|ui| {
            ui.add_space(((available - total_width) / 2.0).max(0.0));
            for (i, control) in cards.iter().enumerate() {
                if i > 0 {
                    ui.add_space(spacing);
                }
                if control_card(ui, control, card_size).clicked() {
                    request = Some(ScreenRequest::Intent(control.intent.clone()));
                }
            }
        });
    });

    ui.add_space(30.0);
    show_activity(ui, activity);

    request
}

fn show_sub_view(ui: &mut Ui, view: &ScreenView) -> Option<ScreenRequest> {
    let mut request = None;

    ui.horizontal(|ui| {
        if let Some(intent) = show_controls(ui, &view.controls) {
            request = Some(ScreenRequest::Intent(intent));
        }
    });
    ui.add_space(10.0);

    panel_header(ui, view.descriptor.screen.name());

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("No inventory records loaded").size(18.0).weak());
        ui.add_space(10.0);
        ui.label("Records are maintained by the inventory service.");
    });

    request
}

/// Render controls as a row of buttons; returns the activated intent.
fn show_controls(ui: &mut Ui, controls: &[Control]) -> Option<IntentId> {
    let mut activated = None;
    ui.horizontal(|ui| {
        for control in controls {
            if control_button(ui, control) {
                activated = Some(control.intent.clone());
            }
        }
    });
    activated
}

fn show_activity(ui: &mut Ui, activity: &[LogEntry]) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(10, 0))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Recent Activity").strong());
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                if activity.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                    return;
                }
                for entry in activity.iter().rev().take(10) {
                    let color = match entry.level {
                        LogLevel::Info => colors::NEUTRAL,
                        LogLevel::Success => colors::SUCCESS,
                        LogLevel::Warning => colors::WARNING,
                        LogLevel::Error => colors::ERROR,
                    };
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                .small()
                                .color(Color32::DARK_GRAY),
                        );
                        ui.label(RichText::new(&entry.message).color(color));
                    });
                }
            });
        });
}
