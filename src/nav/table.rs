//! Per-role dashboards and per-screen dispatch tables.

use std::collections::HashMap;

use crate::error::NavError;
use crate::models::{Action, ActionName, Control, Effect, IntentId, Role, ScreenType};

/// Intent ids used by the standard table.
pub mod intents {
    pub const MANAGE_USERS: &str = "manage_users";
    pub const VIEW_INVENTORY: &str = "view_inventory";
    pub const VIEW_ORDERS: &str = "view_orders";
    pub const BACK: &str = "back";
    pub const LOGOUT: &str = "logout";
    pub const QUIT: &str = "quit";
}

/// Which dashboard each role lands on, and which controls each screen offers.
#[derive(Debug, Clone, Default)]
pub struct NavigationTable {
    dashboards: HashMap<Role, ScreenType>,
    screens: HashMap<ScreenType, Vec<Control>>,
}

impl NavigationTable {
    pub fn builder() -> NavigationTableBuilder {
        NavigationTableBuilder::default()
    }

    /// The stock table for the administrator, seller and buyer dashboards.
    pub fn standard() -> Self {
        use intents::*;

        let view_inventory = Action::new(ActionName::ViewInventory, Effect::Navigate(ScreenType::RecordsView));
        let logout = Action::destructive(ActionName::Logout, Effect::EndSession);
        let quit = Action::destructive(ActionName::Quit, Effect::Terminate);

        let mut builder = Self::builder()
            .dashboard(Role::Admin, ScreenType::AdminDashboard)
            .dashboard(Role::Seller, ScreenType::SellerDashboard)
            .dashboard(Role::Buyer, ScreenType::BuyerDashboard)
            .bind(ScreenType::Login, QUIT, Action::new(ActionName::Quit, Effect::Terminate))
            .bind(
                ScreenType::AdminDashboard,
                MANAGE_USERS,
                Action::new(ActionName::ManageUsers, Effect::Unimplemented),
            )
            .bind(ScreenType::AdminDashboard, VIEW_INVENTORY, view_inventory)
            .bind(ScreenType::SellerDashboard, VIEW_INVENTORY, view_inventory)
            .bind(
                ScreenType::BuyerDashboard,
                VIEW_ORDERS,
                Action::new(ActionName::ViewOrders, Effect::Unimplemented),
            )
            .bind(ScreenType::RecordsView, BACK, Action::new(ActionName::Back, Effect::Home));

        for screen in [
            ScreenType::AdminDashboard,
            ScreenType::SellerDashboard,
            ScreenType::BuyerDashboard,
            ScreenType::RecordsView,
        ] {
            builder = builder.bind(screen, LOGOUT, logout).bind(screen, QUIT, quit);
        }

        // The stock table is validated by `test_standard_table_is_valid`.
        builder.build_unchecked()
    }

    /// Dashboard configured for `role`.
    pub fn dashboard_for(&self, role: Role) -> Option<ScreenType> {
        self.dashboards.get(&role).copied()
    }

    /// Controls offered by `screen`, in binding order.
    pub fn controls(&self, screen: ScreenType) -> &[Control] {
        self.screens.get(&screen).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up the action bound to `intent` on `screen`.
    pub fn resolve(&self, screen: ScreenType, intent: &IntentId) -> Result<&Action, NavError> {
        self.controls(screen)
            .iter()
            .find(|c| &c.intent == intent)
            .map(|c| &c.action)
            .ok_or_else(|| NavError::UnknownIntent {
                screen,
                intent: intent.clone(),
            })
    }

    /// Intent bound to the first action named `name` on `screen`.
    pub fn intent_for(&self, screen: ScreenType, name: ActionName) -> Option<&IntentId> {
        self.controls(screen)
            .iter()
            .find(|c| c.action.name == name)
            .map(|c| &c.intent)
    }

    fn validate(&self) -> Result<(), NavError> {
        for (role, screen) in &self.dashboards {
            if !screen.is_dashboard() {
                return Err(NavError::InvalidTable(format!("{screen} is not a dashboard")));
            }
            if !screen.descriptor().allows(*role) {
                return Err(NavError::InvalidTable(format!("{screen} does not allow role {role}")));
            }
        }

        for (screen, controls) in &self.screens {
            if !screen.is_implemented() {
                return Err(NavError::InvalidTable(format!("{screen} is not implemented")));
            }

            for (i, control) in controls.iter().enumerate() {
                if controls[..i].iter().any(|c| c.intent == control.intent) {
                    return Err(NavError::InvalidTable(format!(
                        "intent '{}' bound twice on {screen}",
                        control.intent
                    )));
                }
                validate_control(*screen, control)?;
            }
        }

        Ok(())
    }
}

fn validate_control(screen: ScreenType, control: &Control) -> Result<(), NavError> {
    let action = &control.action;
    let fail = |reason: String| Err(NavError::InvalidTable(format!("'{}' on {screen}: {reason}", control.intent)));

    if action.destructive && !matches!(action.effect, Effect::EndSession | Effect::Terminate) {
        return fail("destructive actions must end the session or the process".to_string());
    }

    if !screen.requires_session() && !matches!(action.effect, Effect::Unimplemented | Effect::Terminate) {
        return fail("screens without a session may only quit or show notices".to_string());
    }

    match action.effect {
        Effect::Navigate(target) => {
            if !target.is_implemented() {
                return fail(format!("{target} is not implemented"));
            }
            let descriptor = target.descriptor();
            if let Some(role) = screen.allowed_roles().iter().find(|r| !descriptor.allows(**r)) {
                return fail(format!("role {role} may not open {target}"));
            }
        }
        Effect::Home if screen.is_dashboard() => {
            return fail("dashboards have no home to return to".to_string());
        }
        _ => {}
    }

    Ok(())
}

/// Builder for [`NavigationTable`].
#[derive(Debug, Default)]
pub struct NavigationTableBuilder {
    table: NavigationTable,
}

impl NavigationTableBuilder {
    /// Map `role` to its dashboard.
    pub fn dashboard(mut self, role: Role, screen: ScreenType) -> Self {
        self.table.dashboards.insert(role, screen);
        self
    }

    /// Bind `intent` on `screen` to `action`.
    pub fn bind(mut self, screen: ScreenType, intent: &str, action: Action) -> Self {
        self.table
            .screens
            .entry(screen)
            .or_default()
            .push(Control::new(intent, action));
        self
    }

    /// Validate and finish the table.
    pub fn build(self) -> Result<NavigationTable, NavError> {
        self.table.validate()?;
        Ok(self.table)
    }

    pub(crate) fn build_unchecked(self) -> NavigationTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        assert!(NavigationTable::standard().validate().is_ok());
    }

    #[test]
    fn test_every_role_has_a_dashboard() {
        let table = NavigationTable::standard();
        assert_eq!(table.dashboard_for(Role::Admin), Some(ScreenType::AdminDashboard));
        assert_eq!(table.dashboard_for(Role::Seller), Some(ScreenType::SellerDashboard));
        assert_eq!(table.dashboard_for(Role::Buyer), Some(ScreenType::BuyerDashboard));
    }

    #[test]
    fn test_dashboards_only_expose_reachable_targets() {
        let table = NavigationTable::standard();
        for role in Role::ALL {
            let dashboard = table.dashboard_for(role).unwrap();
            for control in table.controls(dashboard) {
                if let Some(target) = control.action.target_screen() {
                    assert!(
                        target.descriptor().allows(role),
                        "{dashboard} exposes {target} to {role}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve() {
        let table = NavigationTable::standard();
        let action = table
            .resolve(ScreenType::AdminDashboard, &IntentId::from(intents::VIEW_INVENTORY))
            .unwrap();
        assert_eq!(action.target_screen(), Some(ScreenType::RecordsView));

        let err = table
            .resolve(ScreenType::BuyerDashboard, &IntentId::from(intents::VIEW_INVENTORY))
            .unwrap_err();
        assert!(matches!(err, NavError::UnknownIntent { screen: ScreenType::BuyerDashboard, .. }));
    }

    #[test]
    fn test_admin_dashboard_controls() {
        let table = NavigationTable::standard();
        let names: Vec<_> = table
            .controls(ScreenType::AdminDashboard)
            .iter()
            .map(|c| c.action.name)
            .collect();
        assert_eq!(
            names,
            vec![
                ActionName::ManageUsers,
                ActionName::ViewInventory,
                ActionName::Logout,
                ActionName::Quit
            ]
        );
        assert_eq!(
            table.intent_for(ScreenType::AdminDashboard, ActionName::Logout),
            Some(&IntentId::from(intents::LOGOUT))
        );
    }

    #[test]
    fn test_rejects_dashboard_for_wrong_role() {
        let result = NavigationTable::builder()
            .dashboard(Role::Buyer, ScreenType::AdminDashboard)
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_unreachable_target() {
        let result = NavigationTable::builder()
            .bind(
                ScreenType::BuyerDashboard,
                "records",
                Action::new(ActionName::ViewInventory, Effect::Navigate(ScreenType::RecordsView)),
            )
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_unimplemented_target() {
        let result = NavigationTable::builder()
            .bind(
                ScreenType::AdminDashboard,
                "users",
                Action::new(ActionName::ManageUsers, Effect::Navigate(ScreenType::UserManagement)),
            )
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_destructive_navigation() {
        let result = NavigationTable::builder()
            .bind(
                ScreenType::AdminDashboard,
                "records",
                Action::destructive(ActionName::ViewInventory, Effect::Navigate(ScreenType::RecordsView)),
            )
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_duplicate_intent() {
        let result = NavigationTable::builder()
            .bind(ScreenType::Login, "quit", Action::new(ActionName::Quit, Effect::Terminate))
            .bind(ScreenType::Login, "quit", Action::new(ActionName::Quit, Effect::Terminate))
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_logout_from_login() {
        let result = NavigationTable::builder()
            .bind(
                ScreenType::Login,
                "logout",
                Action::destructive(ActionName::Logout, Effect::EndSession),
            )
            .build();
        assert!(matches!(result, Err(NavError::InvalidTable(_))));
    }
}
