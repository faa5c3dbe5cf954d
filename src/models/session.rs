//! Authenticated session and role.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Opaque user identifier handed over by the authentication step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User role. Decides which dashboard a session lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
}

impl Role {
    /// Every known role.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Seller, Role::Buyer];

    /// Get the display name for the role.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Seller => "Seller",
            Role::Buyer => "Buyer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An authenticated identity.
///
/// Fields are private and there are no setters: a new login always means a
/// new `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
    display_name: String,
    role: Role,
}

impl Session {
    /// Create a session. The display name must not be blank.
    pub fn new(user_id: UserId, display_name: impl Into<String>, role: Role) -> Result<Self> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(AppError::validation("Display name cannot be empty"));
        }
        if user_id.as_str().trim().is_empty() {
            return Err(AppError::validation("User ID cannot be empty"));
        }
        Ok(Self {
            user_id,
            display_name,
            role,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_accessors() {
        let session = Session::new(UserId::new("u-1"), "Alice", Role::Admin).unwrap();
        assert_eq!(session.user_id().as_str(), "u-1");
        assert_eq!(session.display_name(), "Alice");
        assert_eq!(session.role(), Role::Admin);
    }

    #[test]
    fn test_session_rejects_blank_name() {
        assert!(Session::new(UserId::new("u-1"), "   ", Role::Buyer).is_err());
        assert!(Session::new(UserId::new(""), "Bob", Role::Buyer).is_err());
    }

    #[test]
    fn test_role_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            role: Role,
        }
        let parsed: Wrapper = toml::from_str("role = \"seller\"").unwrap();
        assert_eq!(parsed.role, Role::Seller);
    }
}
