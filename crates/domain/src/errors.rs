//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Al-Badr core operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BadrError {
    /// A record is missing a required field or violates a record invariant.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A currency tag outside the supported set was encountered.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// A caller-supplied argument or document was rejected.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unexpected failure outside the caller's control.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BadrError {
    /// Stable label suitable for structured logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvalidRecord(_) => "invalid_record",
            Self::InvalidCurrency(_) => "invalid_currency",
            Self::InvalidInput(_) => "invalid_input",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Al-Badr operations
pub type Result<T> = std::result::Result<T, BadrError>;
