//! Application constants
//!
//! Centralized defaults. These seed [`crate::AppConfig`]; business logic reads
//! the configured values, never these constants directly.

// Pricing
pub const DEFAULT_EXCHANGE_RATE_IQD_PER_USD: i64 = 1500;

// Warranty thresholds (days remaining, inclusive)
pub const DEFAULT_URGENT_DAYS: u32 = 7;
pub const DEFAULT_WARNING_DAYS: u32 = 30;

/// The backend counts a warranty month as a flat 30 days.
pub const DAYS_PER_WARRANTY_MONTH: u64 = 30;
pub const DEFAULT_WARRANTY_PERIOD_MONTHS: u32 = 12;
pub const DEFAULT_WARRANTY_TYPE: &str = "manufacturer";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_PREFIX: &str = "badr";
