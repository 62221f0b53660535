//! Configuration loader
//!
//! Loads application configuration from a `.env` file, environment variables
//! and config files.
//!
//! ## Loading Strategy
//! 1. Reads `.env` from the working directory (if any) via `dotenvy`
//! 2. Starts from the first config file found by [`probe_config_paths`], or
//!    from [`AppConfig::default`] when there is none
//! 3. Applies environment variable overrides on top
//! 4. Validates the result
//!
//! ## Environment Variables
//! - `BADR_EXCHANGE_RATE`: IQD per one USD (decimal)
//! - `BADR_WARRANTY_URGENT_DAYS`: Days left that count as expiring soon
//! - `BADR_WARRANTY_WARNING_DAYS`: Days left that count as expiring this month
//! - `BADR_LOG_LEVEL`: `tracing` filter directive
//! - `BADR_LOG_JSON`: Emit JSON log lines (true/false)
//! - `BADR_LOG_DIR`: Directory for rotated log files
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./badr.json` or `./badr.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use badr_domain::{AppConfig, BadrError, Result};
use rust_decimal::Decimal;

use crate::errors::InfraError;

pub const ENV_EXCHANGE_RATE: &str = "BADR_EXCHANGE_RATE";
pub const ENV_URGENT_DAYS: &str = "BADR_WARRANTY_URGENT_DAYS";
pub const ENV_WARNING_DAYS: &str = "BADR_WARRANTY_WARNING_DAYS";
pub const ENV_LOG_LEVEL: &str = "BADR_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "BADR_LOG_JSON";
pub const ENV_LOG_DIR: &str = "BADR_LOG_DIR";

/// Load configuration with automatic fallback strategy
///
/// Environment variables win over file values; anything set in neither keeps
/// its default.
///
/// # Errors
/// Returns `BadrError::Config` if:
/// - A probed file cannot be read or parsed
/// - An environment variable has an invalid value
/// - The merged configuration fails validation
pub fn load() -> Result<AppConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }

    let base = match probe_config_paths() {
        Some(path) => read_config_file(&path)?,
        None => {
            tracing::debug!("No config file found, starting from defaults");
            AppConfig::default()
        }
    };

    let config = apply_env_overrides(base)?;
    config.validate()?;
    tracing::info!(
        exchange_rate = %config.pricing.exchange_rate_iqd_per_usd,
        urgent_days = config.warranty.urgent_days,
        warning_days = config.warranty.warning_days,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from environment variables over the defaults
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `BadrError::Config` if a variable has an invalid value or the
/// result fails validation.
pub fn load_from_env() -> Result<AppConfig> {
    let config = apply_env_overrides(AppConfig::default())?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `BadrError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The parsed configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BadrError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BadrError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    let config = read_config_file(&config_path)?;
    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<AppConfig> {
    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `BadrError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents).map_err(InfraError::from)?),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BadrError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(BadrError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Overlay any `BADR_*` variables that are set onto `config`.
fn apply_env_overrides(mut config: AppConfig) -> Result<AppConfig> {
    if let Some(rate) = env_parse::<Decimal>(ENV_EXCHANGE_RATE)? {
        config.pricing.exchange_rate_iqd_per_usd = rate;
    }
    if let Some(days) = env_parse::<u32>(ENV_URGENT_DAYS)? {
        config.warranty.urgent_days = days;
    }
    if let Some(days) = env_parse::<u32>(ENV_WARNING_DAYS)? {
        config.warranty.warning_days = days;
    }
    if let Some(level) = env_var(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);
    if let Some(dir) = env_var(ENV_LOG_DIR) {
        config.logging.directory = Some(PathBuf::from(dir));
    }
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./badr.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> [PathBuf; 8] {
    [
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("badr.json"),
        dir.join("badr.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Non-empty environment variable, if set
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `BadrError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_var(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| BadrError::Config(format!("Invalid value for {key} ({raw}): {e}")))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| {
            let value = s.trim().to_ascii_lowercase();
            matches!(value.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(default)
}
