//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::models::{ActionName, IntentId, ScreenHandle};
use crate::nav::NavigationTable;

use super::components::colors;
use super::host::{NavCommand, NavigatorHandle, ScreenView, UiEvent, spawn_navigator};
use super::screens::{self, ScreenRequest};

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Yes/no question the navigator is waiting on.
struct PendingConfirm {
    prompt: String,
    reply: oneshot::Sender<bool>,
}

/// Main application state.
pub struct App {
    config: AppConfig,

    // Navigator thread
    navigator: NavigatorHandle,
    events: mpsc::UnboundedReceiver<UiEvent>,

    // Active screen as last reported by the navigator
    screen: Option<ScreenView>,

    // Dialogs
    pending_confirm: Option<PendingConfirm>,
    notice: Option<String>,
    error_message: Option<String>,

    log_messages: Vec<LogEntry>,
    exiting: bool,
}

impl App {
    pub fn new(config: AppConfig, initial_error: Option<String>) -> std::io::Result<Self> {
        let (navigator, events) = spawn_navigator(NavigationTable::standard())?;

        let mut app = Self {
            config,
            navigator,
            events,
            screen: None,
            pending_confirm: None,
            notice: None,
            error_message: None,
            log_messages: Vec::new(),
            exiting: false,
        };

        if let Some(error) = initial_error {
            app.log_warning(format!("Using default settings: {error}"));
            app.error_message = Some(error);
        }

        Ok(app)
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    fn send_intent(&mut self, handle: ScreenHandle, intent: IntentId) {
        if !self.navigator.send(NavCommand::Intent(handle, intent)) {
            warn!("Navigator is gone, dropping intent");
        }
    }

    fn sign_in(&mut self, index: usize) {
        let Some(account) = self.config.accounts.get(index) else {
            return;
        };
        match account.to_session() {
            Ok(session) => {
                info!(user = %session.user_id(), "Account selected");
                if !self.navigator.send(NavCommand::Authenticated(session)) {
                    warn!("Navigator is gone, dropping sign-in");
                }
            }
            Err(e) => {
                self.log_error(e.to_string());
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Route a quit request through the active screen's quit control.
    ///
    /// Ignored while no screen is showing, so the window never closes
    /// behind the navigator's back.
    fn request_quit(&mut self) {
        match quit_command(self.screen.as_ref()) {
            Some(command) => {
                if !self.navigator.send(command) {
                    warn!("Navigator is gone, closing");
                    self.exiting = true;
                }
            }
            None => debug!("No active screen, ignoring quit request"),
        }
    }

    /// Drain navigator events.
    fn poll_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                UiEvent::ScreenCreated(view) => {
                    self.log_info(format!("Opened {}", view.descriptor.screen));
                    if let Some(session) = &view.session
                        && view.descriptor.screen.is_dashboard()
                    {
                        let message = format!("Signed in as {}", session.display_name());
                        self.log_success(message);
                    }
                    self.screen = Some(view);
                }
                UiEvent::ScreenDisposed(handle) => {
                    if self.screen.as_ref().is_some_and(|v| v.handle == handle) {
                        self.screen = None;
                    }
                }
                UiEvent::Notice(message) => {
                    self.log_info(message.clone());
                    self.notice = Some(message);
                }
                UiEvent::Alert(message) => {
                    self.log_error(message.clone());
                    self.error_message = Some(message);
                }
                UiEvent::Confirm { prompt, reply } => {
                    self.pending_confirm = Some(PendingConfirm { prompt, reply });
                }
                UiEvent::Exit => {
                    self.exiting = true;
                }
            }
        }

        if self.exiting {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        self.request_quit();
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    match self.screen.as_ref().and_then(|v| v.session.as_ref()) {
                        Some(session) => ui.colored_label(
                            colors::SUCCESS,
                            format!("{} ({})", session.display_name(), session.role()),
                        ),
                        None => ui.colored_label(colors::NEUTRAL, "Not signed in"),
                    };

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(entry) = self.log_messages.last() {
                            ui.label(&entry.message);
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, notice, confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Notice dialog
        if let Some(ref notice) = self.notice.clone() {
            egui::Window::new("Information")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(notice);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
        }

        // Confirmation dialog
        let Some(prompt) = self.pending_confirm.as_ref().map(|p| p.prompt.clone()) else {
            return;
        };

        let mut open = true;
        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(&prompt);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        answer = Some(false);
                    }
                    if ui.button("Yes").clicked() {
                        answer = Some(true);
                    }
                });
            });

        if !open {
            answer = Some(false);
        }
        if let Some(answer) = answer
            && let Some(pending) = self.pending_confirm.take()
        {
            let _ = pending.reply.send(answer);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll navigator events
        self.poll_events(ctx);

        // Closing the window is the designated exit action
        if ctx.input(|i| i.viewport().close_requested()) && !self.exiting {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            if self.pending_confirm.is_none() {
                self.request_quit();
            }
        }

        // The navigator answers on its own thread
        ctx.request_repaint_after(std::time::Duration::from_millis(100));

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_dialogs(ctx);

        let blocked = self.pending_confirm.is_some();
        let mut request = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| match &self.screen {
                Some(view) => {
                    request = screens::show(ui, view, &self.config.accounts, &self.log_messages)
                        .map(|r| (view.handle, r));
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            });
        });

        match request {
            Some((handle, ScreenRequest::Intent(intent))) => self.send_intent(handle, intent),
            Some((_, ScreenRequest::SignIn(index))) => self.sign_in(index),
            None => {}
        }
    }
}

/// Command that quits through the quit control of `screen`, if it has one.
fn quit_command(screen: Option<&ScreenView>) -> Option<NavCommand> {
    let view = screen?;
    view.controls
        .iter()
        .find(|c| c.action.name == ActionName::Quit)
        .map(|c| NavCommand::Intent(view.handle, c.intent.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, ScreenType, Session, UserId};

    fn view(screen: ScreenType, handle: u64) -> ScreenView {
        let table = NavigationTable::standard();
        ScreenView {
            handle: ScreenHandle(handle),
            descriptor: screen.descriptor(),
            session: Session::new(UserId::new("admin"), "Administrator", Role::Admin).ok(),
            controls: table.controls(screen).to_vec(),
        }
    }

    #[test]
    fn test_quit_without_screen_is_ignored() {
        assert!(quit_command(None).is_none());
    }

    #[test]
    fn test_quit_goes_through_active_screen() {
        let dashboard = view(ScreenType::AdminDashboard, 7);
        match quit_command(Some(&dashboard)) {
            Some(NavCommand::Intent(handle, intent)) => {
                assert_eq!(handle, ScreenHandle(7));
                assert_eq!(intent.as_str(), "quit");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quit_without_quit_control_is_ignored() {
        let mut records = view(ScreenType::RecordsView, 3);
        records.controls.retain(|c| c.action.name != ActionName::Quit);
        assert!(quit_command(Some(&records)).is_none());
    }
}
