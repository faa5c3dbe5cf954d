//! Tracing setup: console output plus an optional daily log file.

use std::path::Path;
use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

const LOG_FILE_PREFIX: &str = "stockdesk.log";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the configured level. Keep the returned guard alive
/// for as long as file output is needed. A log directory that cannot be
/// created only disables file output.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = Level::from_str(&config.level).map_err(|e| AppError::logging(e.to_string()))?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (file, file_error) = match config.directory.as_deref().map(file_writer) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let (file_layer, guard) = match file {
        Some((writer, guard)) => (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    if let (Some(dir), Some(e)) = (&config.directory, file_error) {
        tracing::warn!("File logging disabled, cannot use {:?}: {}", dir, e);
    }

    Ok(guard)
}

/// Open a daily rolling writer in `dir`, creating the directory first.
fn file_writer(dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_under_regular_file_fails() {
        let blocker = std::env::temp_dir().join(format!("stockdesk-log-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = file_writer(&blocker.join("logs"));
        let _ = std::fs::remove_file(&blocker);

        assert!(result.is_err());
    }

    #[test]
    fn test_init_survives_unusable_log_directory() {
        let blocker = std::env::temp_dir().join(format!("stockdesk-init-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let config = LoggingConfig {
            level: "info".to_string(),
            directory: Some(blocker.join("logs")),
        };
        let result = init(&config);
        let _ = std::fs::remove_file(&blocker);

        // No file output, and the only test that installs the global subscriber.
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_init_rejects_unknown_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            directory: None,
        };
        assert!(matches!(init(&config), Err(AppError::Logging(_))));
    }
}
