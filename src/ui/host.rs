//! Bridge between the egui thread and the navigator thread.
//!
//! The navigator owns the [`NavigationController`] and drains commands in
//! order. Its host side ([`ChannelHost`]) turns every screen, notice and
//! prompt request into a [`UiEvent`] for the egui app. `confirm` parks the
//! navigator thread on a oneshot reply while the UI keeps rendering.

use std::thread::JoinHandle;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::models::{Control, IntentId, ScreenDescriptor, ScreenHandle, Session};
use crate::nav::{NavigationController, NavigationTable, Presenter, ScreenFactory, Transition};

/// Commands from the UI to the navigator.
#[derive(Debug)]
pub enum NavCommand {
    /// Authentication finished upstream.
    Authenticated(Session),
    /// A control was activated on the screen with this handle.
    Intent(ScreenHandle, IntentId),
}

/// Everything the UI needs to render one screen.
#[derive(Debug, Clone)]
pub struct ScreenView {
    pub handle: ScreenHandle,
    pub descriptor: ScreenDescriptor,
    pub session: Option<Session>,
    pub controls: Vec<Control>,
}

/// Messages from the navigator to the UI.
#[derive(Debug)]
pub enum UiEvent {
    ScreenCreated(ScreenView),
    ScreenDisposed(ScreenHandle),
    Notice(String),
    Alert(String),
    Confirm {
        prompt: String,
        reply: oneshot::Sender<bool>,
    },
    /// The navigator has shut down; the window should close.
    Exit,
}

/// Host capabilities backed by a channel to the UI.
pub struct ChannelHost {
    tx: mpsc::UnboundedSender<UiEvent>,
    next_handle: u64,
}

impl ChannelHost {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx, next_handle: 0 }
    }
}

impl ScreenFactory for ChannelHost {
    fn create_screen(
        &mut self,
        descriptor: &ScreenDescriptor,
        session: Option<&Session>,
        controls: &[Control],
    ) -> ScreenHandle {
        self.next_handle += 1;
        let handle = ScreenHandle(self.next_handle);
        let _ = self.tx.send(UiEvent::ScreenCreated(ScreenView {
            handle,
            descriptor: *descriptor,
            session: session.cloned(),
            controls: controls.to_vec(),
        }));
        handle
    }

    fn dispose(&mut self, handle: ScreenHandle) {
        let _ = self.tx.send(UiEvent::ScreenDisposed(handle));
    }
}

impl Presenter for ChannelHost {
    fn notify(&mut self, message: &str) {
        let _ = self.tx.send(UiEvent::Notice(message.to_string()));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        let (reply, answer) = oneshot::channel();
        let request = UiEvent::Confirm {
            prompt: prompt.to_string(),
            reply,
        };
        if self.tx.send(request).is_err() {
            return false;
        }
        // A dropped sender means the dialog was dismissed or the UI is gone.
        answer.blocking_recv().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        let _ = self.tx.send(UiEvent::Alert(message.to_string()));
    }
}

/// UI-side handle to the navigator thread.
pub struct NavigatorHandle {
    commands: mpsc::UnboundedSender<NavCommand>,
    _thread: JoinHandle<()>,
}

impl NavigatorHandle {
    /// Queue a command. Returns `false` once the navigator has stopped.
    pub fn send(&self, command: NavCommand) -> bool {
        self.commands.send(command).is_ok()
    }
}

/// Start the navigator thread.
pub fn spawn_navigator(
    table: NavigationTable,
) -> std::io::Result<(NavigatorHandle, mpsc::UnboundedReceiver<UiEvent>)> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let thread = std::thread::Builder::new()
        .name("navigator".to_string())
        .spawn(move || run_navigator(table, event_tx, command_rx))?;

    Ok((
        NavigatorHandle {
            commands: command_tx,
            _thread: thread,
        },
        event_rx,
    ))
}

fn run_navigator(
    table: NavigationTable,
    events: mpsc::UnboundedSender<UiEvent>,
    mut commands: mpsc::UnboundedReceiver<NavCommand>,
) {
    let mut nav = NavigationController::start(table, ChannelHost::new(events.clone()));

    while let Some(command) = commands.blocking_recv() {
        let transition = match command {
            NavCommand::Authenticated(session) => match nav.on_authenticated(session) {
                Ok(transition) => transition,
                Err(e) if e.is_user_facing() => {
                    info!("Sign-in rejected: {}", e);
                    continue;
                }
                Err(e) => {
                    debug!("Authentication not applied: {}", e);
                    continue;
                }
            },
            NavCommand::Intent(handle, intent) => {
                let active = nav.active_screen().handle;
                if handle != active {
                    debug!(%intent, stale = %handle, %active, "Dropping intent from a replaced screen");
                    continue;
                }
                nav.on_intent(&intent)
            }
        };

        if transition == Transition::Terminate {
            break;
        }
    }

    nav.shutdown();
    let _ = events.send(UiEvent::Exit);
    info!("Navigator thread finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, ScreenType, UserId};
    use crate::nav::table::intents;

    fn next(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> UiEvent {
        rx.blocking_recv().expect("navigator hung up")
    }

    #[test]
    fn test_confirm_round_trip() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let asker = std::thread::spawn(move || ChannelHost::new(tx).confirm("Really?"));

        match next(&mut rx) {
            UiEvent::Confirm { prompt, reply } => {
                assert_eq!(prompt, "Really?");
                reply.send(true).unwrap();
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(asker.join().unwrap());
    }

    #[test]
    fn test_dismissed_confirm_is_no() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let asker = std::thread::spawn(move || ChannelHost::new(tx).confirm("Really?"));

        match next(&mut rx) {
            UiEvent::Confirm { reply, .. } => drop(reply),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!asker.join().unwrap());
    }

    #[test]
    fn test_confirm_without_ui_is_no() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert!(!ChannelHost::new(tx).confirm("Really?"));
    }

    #[test]
    fn test_navigator_session_lifecycle() {
        let (navigator, mut rx) = spawn_navigator(NavigationTable::standard()).unwrap();

        let login = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };
        assert_eq!(login.descriptor.screen, ScreenType::Login);
        assert!(login.session.is_none());

        let session = Session::new(UserId::new("admin"), "Administrator", Role::Admin).unwrap();
        assert!(navigator.send(NavCommand::Authenticated(session)));
        assert!(matches!(next(&mut rx), UiEvent::ScreenDisposed(h) if h == login.handle));
        let dashboard = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };
        assert_eq!(dashboard.descriptor.screen, ScreenType::AdminDashboard);
        assert_eq!(dashboard.controls.len(), 4);

        assert!(navigator.send(NavCommand::Intent(dashboard.handle, IntentId::from(intents::MANAGE_USERS))));
        assert!(matches!(next(&mut rx), UiEvent::Notice(m) if m == "Manage Users is not available yet."));

        assert!(navigator.send(NavCommand::Intent(dashboard.handle, IntentId::from(intents::LOGOUT))));
        match next(&mut rx) {
            UiEvent::Confirm { reply, .. } => reply.send(true).unwrap(),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(next(&mut rx), UiEvent::ScreenDisposed(h) if h == dashboard.handle));
        let login = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };
        assert_eq!(login.descriptor.screen, ScreenType::Login);

        assert!(navigator.send(NavCommand::Intent(login.handle, IntentId::from(intents::QUIT))));
        assert!(matches!(next(&mut rx), UiEvent::ScreenDisposed(h) if h == login.handle));
        assert!(matches!(next(&mut rx), UiEvent::Exit));
    }

    #[test]
    fn test_intent_from_replaced_screen_is_dropped() {
        let (navigator, mut rx) = spawn_navigator(NavigationTable::standard()).unwrap();
        let login = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };

        let session = Session::new(UserId::new("seller"), "Store Seller", Role::Seller).unwrap();
        assert!(navigator.send(NavCommand::Authenticated(session)));
        assert!(matches!(next(&mut rx), UiEvent::ScreenDisposed(h) if h == login.handle));
        let dashboard = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };

        // A quit queued on the login screen must not reach the dashboard.
        assert!(navigator.send(NavCommand::Intent(login.handle, IntentId::from(intents::QUIT))));
        assert!(navigator.send(NavCommand::Intent(
            dashboard.handle,
            IntentId::from(intents::VIEW_INVENTORY)
        )));

        assert!(matches!(next(&mut rx), UiEvent::ScreenDisposed(h) if h == dashboard.handle));
        let records = match next(&mut rx) {
            UiEvent::ScreenCreated(view) => view,
            other => panic!("unexpected event: {other:?}"),
        };
        assert_eq!(records.descriptor.screen, ScreenType::RecordsView);
    }
}
