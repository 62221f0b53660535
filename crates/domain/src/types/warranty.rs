//! Warranty records and evaluation results

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{DEFAULT_WARRANTY_PERIOD_MONTHS, DEFAULT_WARRANTY_TYPE};
use crate::errors::{BadrError, Result};

/// Warranty identifier as issued by the backend (integer or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(untagged)]
pub enum WarrantyId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for WarrantyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for WarrantyId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for WarrantyId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Persisted warranty state, set by the backend
///
/// `Claimed` and `Void` are terminal. `Expired` may be stored by the backend,
/// but the evaluator derives expiry from the end date on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum WarrantyState {
    #[default]
    Active,
    Claimed,
    Expired,
    Void,
}

impl WarrantyState {
    /// No further claims or extensions are accepted in a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Claimed | Self::Void)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Claimed => "claimed",
            Self::Expired => "expired",
            Self::Void => "void",
        }
    }
}

impl fmt::Display for WarrantyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarrantyState {
    type Err = BadrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "claimed" => Ok(Self::Claimed),
            "expired" => Ok(Self::Expired),
            "void" => Ok(Self::Void),
            other => Err(BadrError::InvalidInput(format!("unknown warranty status '{other}'"))),
        }
    }
}

/// One filed claim, in filing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ClaimEntry {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub details: String,
    /// 1-based; equals `claim_count` right after the claim
    pub claim_number: u32,
}

/// A warranty as delivered by `GET /api/warranties`, after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WarrantyRecord {
    pub id: WarrantyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub warranty_type: String,
    pub warranty_period_months: u32,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: WarrantyState,
    #[serde(default)]
    pub claim_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(type = "string", optional))]
    pub last_claim_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claim_history: Vec<ClaimEntry>,
}

impl WarrantyRecord {
    /// Minimal active record with default type and period
    pub fn new(id: impl Into<WarrantyId>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            product_name: None,
            customer_name: None,
            customer_phone: None,
            warranty_type: DEFAULT_WARRANTY_TYPE.to_string(),
            warranty_period_months: DEFAULT_WARRANTY_PERIOD_MONTHS,
            start_date,
            end_date,
            status: WarrantyState::Active,
            claim_count: 0,
            last_claim_date: None,
            claim_history: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: WarrantyState) -> Self {
        self.status = status;
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>, phone: Option<String>) -> Self {
        self.customer_name = Some(name.into());
        self.customer_phone = phone;
        self
    }

    pub fn with_product(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }
}

/* -------------------------------------------------------------------------- */
/* Evaluation Results */
/* -------------------------------------------------------------------------- */

/// Read-time classification of a warranty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum WarrantyBucket {
    Claimed,
    Void,
    Expired,
    /// Within the urgent threshold (7 days by default)
    ExpiringSoon,
    /// Within the warning threshold (30 days by default)
    ExpiringMonth,
    Active,
}

/// Display color tag consumed by the warranty views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Blue,
    Gray,
    Red,
    Yellow,
    Green,
}

/// Result of evaluating one warranty at a reference instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WarrantyStatus {
    pub status: WarrantyBucket,
    pub color: StatusColor,
    /// Arabic display message
    pub message: String,
    /// Whole days until the end date, never negative
    pub days_remaining: u32,
}

/// Expiry filter offered by the warranty list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ExpiryFilter {
    #[default]
    All,
    /// `0 < days <= warning threshold`
    ExpiringWarning,
    /// `0 < days <= urgent threshold`
    ExpiringUrgent,
    /// `days == 0`
    Expired,
}
