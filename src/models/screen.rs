//! Screen descriptors and the navigation state derived from them.

use std::fmt;

use super::session::Role;

/// Every top-level screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenType {
    Login,
    AdminDashboard,
    SellerDashboard,
    BuyerDashboard,
    RecordsView,
    /// Declared in the UI but not built yet.
    UserManagement,
}

impl ScreenType {
    /// Every screen type, in declaration order.
    pub const ALL: [ScreenType; 6] = [
        ScreenType::Login,
        ScreenType::AdminDashboard,
        ScreenType::SellerDashboard,
        ScreenType::BuyerDashboard,
        ScreenType::RecordsView,
        ScreenType::UserManagement,
    ];

    /// Get the display name for the screen.
    pub fn name(&self) -> &'static str {
        match self {
            ScreenType::Login => "Login",
            ScreenType::AdminDashboard => "Administrator Dashboard",
            ScreenType::SellerDashboard => "Seller Dashboard",
            ScreenType::BuyerDashboard => "Buyer Dashboard",
            ScreenType::RecordsView => "Inventory Records",
            ScreenType::UserManagement => "User Management",
        }
    }

    /// Roles allowed to hold this screen. Empty for Login, which takes no session.
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            ScreenType::Login => &[],
            ScreenType::AdminDashboard => &[Role::Admin],
            ScreenType::SellerDashboard => &[Role::Seller],
            ScreenType::BuyerDashboard => &[Role::Buyer],
            ScreenType::RecordsView => &[Role::Admin, Role::Seller],
            ScreenType::UserManagement => &[Role::Admin],
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, ScreenType::Login)
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            ScreenType::AdminDashboard | ScreenType::SellerDashboard | ScreenType::BuyerDashboard
        )
    }

    pub fn is_implemented(&self) -> bool {
        !matches!(self, ScreenType::UserManagement)
    }

    pub fn descriptor(self) -> ScreenDescriptor {
        ScreenDescriptor {
            screen: self,
            allowed_roles: self.allowed_roles(),
        }
    }
}

impl fmt::Display for ScreenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the screen factory needs to know to build a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub screen: ScreenType,
    pub allowed_roles: &'static [Role],
}

impl ScreenDescriptor {
    pub fn requires_session(&self) -> bool {
        self.screen.requires_session()
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Opaque token for a live screen, minted by the screen factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenHandle(pub u64);

impl fmt::Display for ScreenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Navigation state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    OnLogin,
    OnDashboard(Role),
    OnSubView(Role, ScreenType),
}

impl NavState {
    pub fn role(&self) -> Option<Role> {
        match self {
            NavState::OnLogin => None,
            NavState::OnDashboard(role) | NavState::OnSubView(role, _) => Some(*role),
        }
    }
}
