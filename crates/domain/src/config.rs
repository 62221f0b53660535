//! Configuration management

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXCHANGE_RATE_IQD_PER_USD, DEFAULT_LOG_LEVEL, DEFAULT_URGENT_DAYS,
    DEFAULT_WARNING_DAYS,
};
use crate::errors::{BadrError, Result};
use crate::types::ExchangeRate;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub warranty: WarrantyConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Currency conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    #[serde(alias = "exchangeRateIqdPerUsd")]
    pub exchange_rate_iqd_per_usd: Decimal,
}

/// Warranty expiry thresholds, in days remaining (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyConfig {
    #[serde(alias = "urgentDays")]
    pub urgent_days: u32,
    #[serde(alias = "warningDays")]
    pub warning_days: u32,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `badr_core=debug`
    pub level: String,
    pub json: bool,
    /// Directory for daily rotated log files; console only when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { exchange_rate_iqd_per_usd: Decimal::from(DEFAULT_EXCHANGE_RATE_IQD_PER_USD) }
    }
}

impl Default for WarrantyConfig {
    fn default() -> Self {
        Self { urgent_days: DEFAULT_URGENT_DAYS, warning_days: DEFAULT_WARNING_DAYS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false, directory: None }
    }
}

impl PricingConfig {
    /// # Errors
    /// Returns `BadrError::Config` when the configured rate is not positive.
    pub fn exchange_rate(&self) -> Result<ExchangeRate> {
        ExchangeRate::new(self.exchange_rate_iqd_per_usd)
            .map_err(|e| BadrError::Config(format!("pricing.exchange_rate_iqd_per_usd: {e}")))
    }
}

impl WarrantyConfig {
    /// # Errors
    /// Returns `BadrError::Config` when `urgent_days > warning_days`.
    pub fn validate(&self) -> Result<()> {
        if self.urgent_days > self.warning_days {
            return Err(BadrError::Config(format!(
                "warranty.urgent_days ({}) must not exceed warranty.warning_days ({})",
                self.urgent_days, self.warning_days
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Check every section; loaders call this before handing the config out.
    ///
    /// # Errors
    /// Returns the first `BadrError::Config` found.
    pub fn validate(&self) -> Result<()> {
        self.pricing.exchange_rate()?;
        self.warranty.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(BadrError::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}
