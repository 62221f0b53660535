//! Currency-tagged money
//!
//! The shop transacts in Iraqi Dinar and US Dollar. Amounts carry their
//! currency and are only combined after an explicit conversion through an
//! [`ExchangeRate`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::DEFAULT_EXCHANGE_RATE_IQD_PER_USD;
use crate::errors::{BadrError, Result};

/// Supported transaction currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Iraqi Dinar, whole units
    Iqd,
    /// United States Dollar, cents precision
    Usd,
}

impl Currency {
    /// ISO 4217 code as used by the backend
    pub fn code(self) -> &'static str {
        match self {
            Self::Iqd => "IQD",
            Self::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = BadrError;

    /// Parses a currency tag, tolerating surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IQD" => Ok(Self::Iqd),
            "USD" => Ok(Self::Usd),
            other => Err(BadrError::InvalidCurrency(other.to_string())),
        }
    }
}

/// A non-negative amount in a single currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(try_from = "MonetaryAmountRepr")]
pub struct MonetaryAmount {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    value: Decimal,
    currency: Currency,
}

impl MonetaryAmount {
    /// Create an amount, rejecting negative values.
    ///
    /// # Errors
    /// Returns [`BadrError::InvalidInput`] when `value` is negative.
    pub fn new(value: Decimal, currency: Currency) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(BadrError::InvalidInput(format!(
                "monetary amount must be non-negative, got {value} {currency}"
            )));
        }
        Ok(Self { value, currency })
    }

    /// Validated amount in Iraqi dinars
    pub fn iqd(value: Decimal) -> Result<Self> {
        Self::new(value, Currency::Iqd)
    }

    /// Validated amount in US dollars
    pub fn usd(value: Decimal) -> Result<Self> {
        Self::new(value, Currency::Usd)
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self { value: Decimal::ZERO, currency }
    }

    /// Numeric value in this amount's own currency
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Currency tag
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Express this amount in `target` through `rate`.
    ///
    /// Same-currency conversion returns the amount unchanged, so converting an
    /// already converted amount is a no-op.
    pub fn convert_to(&self, target: Currency, rate: ExchangeRate) -> Self {
        let value = match (self.currency, target) {
            // Both directions saturate at Decimal::MAX instead of overflowing
            (Currency::Iqd, Currency::Usd) => {
                self.value.checked_div(rate.iqd_per_usd()).unwrap_or(Decimal::MAX)
            }
            (Currency::Usd, Currency::Iqd) => {
                self.value.checked_mul(rate.iqd_per_usd()).unwrap_or(Decimal::MAX)
            }
            _ => self.value,
        };
        Self { value, currency: target }
    }
}

#[derive(Deserialize)]
struct MonetaryAmountRepr {
    value: Decimal,
    currency: Currency,
}

impl TryFrom<MonetaryAmountRepr> for MonetaryAmount {
    type Error = BadrError;

    fn try_from(repr: MonetaryAmountRepr) -> Result<Self> {
        Self::new(repr.value, repr.currency)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// IQD per one USD
///
/// Always strictly positive, so conversions never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// # Errors
    /// Returns [`BadrError::InvalidInput`] unless `iqd_per_usd > 0`.
    pub fn new(iqd_per_usd: Decimal) -> Result<Self> {
        if iqd_per_usd <= Decimal::ZERO {
            return Err(BadrError::InvalidInput(format!(
                "exchange rate must be positive, got {iqd_per_usd}"
            )));
        }
        Ok(Self(iqd_per_usd))
    }

    pub fn iqd_per_usd(&self) -> Decimal {
        self.0
    }
}

impl Default for ExchangeRate {
    /// The shop's standing rate of 1500 IQD per USD
    fn default() -> Self {
        Self(Decimal::from(DEFAULT_EXCHANGE_RATE_IQD_PER_USD))
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = BadrError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}
