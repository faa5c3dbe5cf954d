//! Configuration management module.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Role, Session, UserId};

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Accounts offered on the login screen.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily log files. Console only when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A login profile. Authentication happens upstream; this only names who
/// the resulting session belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
}

impl AccountConfig {
    fn new(user_id: &str, display_name: &str, role: Role) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            role,
        }
    }

    /// Build a session for this account.
    pub fn to_session(&self) -> crate::Result<Session> {
        Session::new(UserId::new(&self.user_id), &self.display_name, self.role)
    }
}

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Per-user log directory, if the platform has one.
    pub fn default_log_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockdesk", "Stockdesk").map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.title.trim().is_empty() {
            return Err(ConfigError::Validation("Window title cannot be empty".to_string()));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.window.width) || !positive(self.window.height) {
            return Err(ConfigError::Validation(
                "Window size must be greater than 0".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }
        for (i, account) in self.accounts.iter().enumerate() {
            if account.user_id.trim().is_empty() {
                return Err(ConfigError::Validation("Account user ID cannot be empty".to_string()));
            }
            if account.display_name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Account '{}' needs a display name",
                    account.user_id
                )));
            }
            if self.accounts[..i].iter().any(|a| a.user_id == account.user_id) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate account '{}'",
                    account.user_id
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
            accounts: vec![
                AccountConfig::new("admin", "Administrator", Role::Admin),
                AccountConfig::new("seller", "Store Seller", Role::Seller),
                AccountConfig::new("buyer", "Walk-in Buyer", Role::Buyer),
            ],
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Stockdesk".to_string(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: AppConfig::default_log_dir(),
        }
    }
}
