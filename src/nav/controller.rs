//! The navigator: owns the active screen and the session.

use tracing::{debug, error, info, warn};

use super::gate::{ConfirmationGate, GateOutcome};
use super::surface::{Presenter, ScreenFactory};
use super::table::NavigationTable;
use crate::error::NavError;
use crate::models::{Control, Effect, IntentId, NavState, ScreenDescriptor, ScreenHandle, ScreenType, Session};

/// The single live top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveScreen {
    pub descriptor: ScreenDescriptor,
    pub handle: ScreenHandle,
}

/// What an event did to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new screen replaced the previous one.
    Navigated(NavState),
    /// An unimplemented feature was reported to the user.
    Notified,
    /// A destructive action was declined.
    Cancelled,
    /// The session ended and Login is showing.
    LoggedOut,
    /// The user asked to end the process. The host should call
    /// [`NavigationController::shutdown`] and exit.
    Terminate,
    /// A wiring defect was logged; nothing changed.
    Ignored(NavError),
}

/// Navigation state machine.
///
/// Exactly one screen is alive at any time. It starts on Login with no
/// session. All state changes go through `&mut self`, so one event is fully
/// handled, confirmation included, before the next is accepted.
pub struct NavigationController<H> {
    table: NavigationTable,
    gate: ConfirmationGate,
    host: H,
    active: ActiveScreen,
    session: Option<Session>,
}

impl<H: ScreenFactory + Presenter> NavigationController<H> {
    /// Create the Login screen and start in `OnLogin`.
    pub fn start(table: NavigationTable, mut host: H) -> Self {
        let descriptor = ScreenType::Login.descriptor();
        let handle = host.create_screen(&descriptor, None, table.controls(ScreenType::Login));
        info!(handle = %handle, "Navigator started on login screen");

        Self {
            table,
            gate: ConfirmationGate::new(),
            host,
            active: ActiveScreen { descriptor, handle },
            session: None,
        }
    }

    /// Take over a freshly authenticated session and open its dashboard.
    ///
    /// `UnsupportedRole` is shown to the user and the session is dropped; the
    /// navigator stays on Login.
    pub fn on_authenticated(&mut self, session: Session) -> Result<Transition, NavError> {
        if self.session.is_some() || self.active.descriptor.screen != ScreenType::Login {
            let err = NavError::SessionActive;
            warn!(user = %session.user_id(), error = %err, "Ignoring authentication");
            return Err(err);
        }

        let role = session.role();
        let Some(dashboard) = self.table.dashboard_for(role) else {
            let err = NavError::UnsupportedRole(role);
            error!(user = %session.user_id(), %role, "No dashboard configured for role");
            self.host.alert(&format!("{err}. Please contact support."));
            return Err(err);
        };

        if !dashboard.descriptor().allows(role) {
            let err = NavError::ForbiddenTransition { role, target: dashboard };
            warn!(error = %err, "Ignoring authentication");
            return Err(err);
        }

        info!(user = %session.user_id(), %role, "Signed in");
        self.session = Some(session);
        Ok(self.replace_screen(dashboard))
    }

    /// Handle a control activation reported by the active screen.
    ///
    /// Never fails: wiring defects come back as [`Transition::Ignored`] with
    /// the state untouched.
    pub fn on_intent(&mut self, intent: &IntentId) -> Transition {
        let screen = self.active.descriptor.screen;
        let action = match self.table.resolve(screen, intent) {
            Ok(action) => *action,
            Err(err) => return self.contain(err),
        };
        debug!(%screen, %intent, action = %action.name, "Resolved intent");

        if self.gate.guard(&action, &mut self.host) == GateOutcome::Cancelled {
            return Transition::Cancelled;
        }

        match action.effect {
            Effect::Unimplemented => {
                let notice = action.unavailable_notice();
                info!(action = %action.name, "Feature not available");
                self.host.notify(&notice);
                Transition::Notified
            }
            Effect::Navigate(target) => self.navigate(target),
            Effect::Home => {
                let Some(role) = self.session.as_ref().map(Session::role) else {
                    return self.contain(NavError::MissingSession(screen));
                };
                match self.table.dashboard_for(role) {
                    Some(dashboard) => self.navigate(dashboard),
                    None => self.contain(NavError::UnsupportedRole(role)),
                }
            }
            Effect::EndSession => self.logout(),
            Effect::Terminate => {
                info!(%screen, "Process termination requested");
                Transition::Terminate
            }
        }
    }

    /// Release the active screen and the session.
    pub fn shutdown(mut self) {
        self.host.dispose(self.active.handle);
        if let Some(session) = self.session.take() {
            info!(user = %session.user_id(), "Session discarded on shutdown");
        }
        info!("Navigator shut down");
    }

    fn navigate(&mut self, target: ScreenType) -> Transition {
        let Some(role) = self.session.as_ref().map(Session::role) else {
            return self.contain(NavError::MissingSession(target));
        };
        if !target.descriptor().allows(role) {
            return self.contain(NavError::ForbiddenTransition { role, target });
        }
        self.replace_screen(target)
    }

    fn logout(&mut self) -> Transition {
        self.host.dispose(self.active.handle);
        let session = self.session.take();

        let descriptor = ScreenType::Login.descriptor();
        let handle = self
            .host
            .create_screen(&descriptor, None, self.table.controls(ScreenType::Login));
        self.active = ActiveScreen { descriptor, handle };

        if let Some(session) = session {
            info!(user = %session.user_id(), "Logged out");
        }
        Transition::LoggedOut
    }

    /// Dispose the active screen, then create `target` with the current session.
    fn replace_screen(&mut self, target: ScreenType) -> Transition {
        let previous = self.active;
        self.host.dispose(previous.handle);

        let descriptor = target.descriptor();
        let handle = self
            .host
            .create_screen(&descriptor, self.session.as_ref(), self.table.controls(target));
        self.active = ActiveScreen { descriptor, handle };

        let state = self.state();
        info!(
            from = %previous.descriptor.screen,
            to = %target,
            handle = %handle,
            "Screen replaced"
        );
        Transition::Navigated(state)
    }

    fn contain(&self, err: NavError) -> Transition {
        warn!(screen = %self.active.descriptor.screen, error = %err, "Ignoring navigation event");
        Transition::Ignored(err)
    }
}

impl<H> NavigationController<H> {
    pub fn state(&self) -> NavState {
        let screen = self.active.descriptor.screen;
        match self.session.as_ref().map(Session::role) {
            None => NavState::OnLogin,
            Some(role) if screen.is_dashboard() => NavState::OnDashboard(role),
            Some(role) => NavState::OnSubView(role, screen),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn active_screen(&self) -> ActiveScreen {
        self.active
    }

    /// Controls offered by the active screen.
    pub fn controls(&self) -> &[Control] {
        self.table.controls(self.active.descriptor.screen)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
