//! Logical actions and the controls that trigger them.

use std::fmt;

use super::screen::ScreenType;

/// Identifier of a rendered control, as reported by a screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntentId(String);

impl IntentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IntentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for IntentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logical action names, independent of any role or widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionName {
    ManageUsers,
    ViewInventory,
    ViewOrders,
    Back,
    Logout,
    Quit,
}

impl ActionName {
    /// Get the display label for the action.
    pub fn label(&self) -> &'static str {
        match self {
            ActionName::ManageUsers => "Manage Users",
            ActionName::ViewInventory => "View Inventory",
            ActionName::ViewOrders => "My Orders",
            ActionName::Back => "Back to Dashboard",
            ActionName::Logout => "Logout",
            ActionName::Quit => "Quit",
        }
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What happens when an action goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Replace the active screen with the target.
    Navigate(ScreenType),
    /// Replace the active screen with the dashboard of the session's role.
    Home,
    /// Feature shown in the UI but not built; the user gets a notice.
    Unimplemented,
    /// Discard the session and return to Login.
    EndSession,
    /// End the process.
    Terminate,
}

/// A logical action bound to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub name: ActionName,
    /// Destructive actions must be confirmed before anything changes.
    pub destructive: bool,
    pub effect: Effect,
}

impl Action {
    pub const fn new(name: ActionName, effect: Effect) -> Self {
        Self {
            name,
            destructive: false,
            effect,
        }
    }

    pub const fn destructive(name: ActionName, effect: Effect) -> Self {
        Self {
            name,
            destructive: true,
            effect,
        }
    }

    /// Fixed navigation target, if any.
    pub fn target_screen(&self) -> Option<ScreenType> {
        match self.effect {
            Effect::Navigate(screen) => Some(screen),
            _ => None,
        }
    }

    /// Text of the yes/no prompt shown before a destructive action.
    pub fn confirm_prompt(&self) -> String {
        match self.effect {
            Effect::EndSession => "Are you sure you want to log out?".to_string(),
            Effect::Terminate => "Quit the application? You will be logged out.".to_string(),
            _ => format!("Are you sure you want to continue with '{}'?", self.name.label()),
        }
    }

    /// Message shown when an unimplemented action is triggered.
    pub fn unavailable_notice(&self) -> String {
        format!("{} is not available yet.", self.name.label())
    }
}

/// One row of a screen's dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub intent: IntentId,
    pub action: Action,
}

impl Control {
    pub fn new(intent: impl Into<String>, action: Action) -> Self {
        Self {
            intent: IntentId::new(intent),
            action,
        }
    }

    pub fn label(&self) -> &'static str {
        self.action.name.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_screen_only_for_navigate() {
        let view = Action::new(ActionName::ViewInventory, Effect::Navigate(ScreenType::RecordsView));
        assert_eq!(view.target_screen(), Some(ScreenType::RecordsView));

        let manage = Action::new(ActionName::ManageUsers, Effect::Unimplemented);
        assert_eq!(manage.target_screen(), None);
        assert!(!manage.destructive);

        let logout = Action::destructive(ActionName::Logout, Effect::EndSession);
        assert_eq!(logout.target_screen(), None);
        assert!(logout.destructive);
    }

    #[test]
    fn test_prompts_and_notices() {
        let logout = Action::destructive(ActionName::Logout, Effect::EndSession);
        assert_eq!(logout.confirm_prompt(), "Are you sure you want to log out?");

        let manage = Action::new(ActionName::ManageUsers, Effect::Unimplemented);
        assert_eq!(manage.unavailable_notice(), "Manage Users is not available yet.");
    }
}
