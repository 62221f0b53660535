//! Tracing subscriber setup
//!
//! Console output always; a daily rotated file under
//! [`LoggingConfig::directory`] when one is configured. `RUST_LOG` takes
//! precedence over the configured level.

use badr_domain::constants::LOG_FILE_PREFIX;
use badr_domain::{BadrError, LoggingConfig, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::errors::InfraError;

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and closes the log file.
///
/// # Errors
/// Returns `BadrError::Config` for an unparseable level or an unusable log
/// directory, and `BadrError::Internal` if a global subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let console = if config.json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let (file, guard) = match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(InfraError::from)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = if config.json {
                fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
            } else {
                fmt::layer().with_writer(writer).with_ansi(false).with_target(true).boxed()
            };
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| BadrError::Internal(format!("tracing subscriber already installed: {e}")))?;

    tracing::debug!(
        level = %config.level,
        json = config.json,
        file = config.directory.is_some(),
        "tracing initialised"
    );
    Ok(guard)
}

/// Parse a `tracing` filter directive such as `info,badr_core=debug`.
///
/// # Errors
/// Returns `BadrError::Config` if the directive does not parse.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| BadrError::Config(format!("Invalid log level '{level}': {e}")))
}
