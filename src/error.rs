//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::{IntentId, Role, ScreenType};

/// Navigation failures.
///
/// `UnknownIntent`, `ForbiddenTransition`, `SessionActive` and
/// `MissingSession` are wiring defects: the controller logs them and keeps
/// its state. `UnsupportedRole` is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Control not registered on the active screen
    #[error("Unknown intent '{intent}' on screen {screen}")]
    UnknownIntent { screen: ScreenType, intent: IntentId },

    /// Role is not allowed on the target screen
    #[error("Role {role} may not open {target}")]
    ForbiddenTransition { role: Role, target: ScreenType },

    /// No dashboard configured for the role
    #[error("No dashboard is configured for role {0}")]
    UnsupportedRole(Role),

    /// Authentication reported while a session is already open
    #[error("A session is already active")]
    SessionActive,

    /// Target screen needs a session but none is open
    #[error("{0} requires an active session")]
    MissingSession(ScreenType),

    /// Navigation table failed validation
    #[error("Invalid navigation table: {0}")]
    InvalidTable(String),
}

impl NavError {
    /// Whether the error should be shown to the end user.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, NavError::UnsupportedRole(_))
    }
}

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Navigation failed
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavError),

    /// Configuration file problem
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a logging error with message
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_unsupported_role_is_user_facing() {
        assert!(NavError::UnsupportedRole(Role::Buyer).is_user_facing());
        assert!(!NavError::SessionActive.is_user_facing());
        assert!(
            !NavError::UnknownIntent {
                screen: ScreenType::Login,
                intent: IntentId::new("nope"),
            }
            .is_user_facing()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = NavError::ForbiddenTransition {
            role: Role::Buyer,
            target: ScreenType::RecordsView,
        };
        assert_eq!(err.to_string(), "Role Buyer may not open Inventory Records");

        let app: AppError = NavError::UnsupportedRole(Role::Seller).into();
        assert_eq!(
            app.to_string(),
            "Navigation error: No dashboard is configured for role Seller"
        );
    }
}
