//! Sales, expenses and the period filter used by reports

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::money::MonetaryAmount;

/// Anything that contributes a dated amount to a financial report
pub trait MonetaryEntry {
    /// Amount in its recorded currency
    fn amount(&self) -> &MonetaryAmount;

    /// Calendar date used for period filtering
    fn date(&self) -> NaiveDate;
}

/// A recorded sale (`GET /api/sales`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub sale_date: NaiveDateTime,
    pub amount: MonetaryAmount,
}

impl MonetaryEntry for Sale {
    fn amount(&self) -> &MonetaryAmount {
        &self.amount
    }

    fn date(&self) -> NaiveDate {
        self.sale_date.date()
    }
}

/// A recorded shop expense (`GET /api/expenses`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub expense_date: NaiveDateTime,
    pub amount: MonetaryAmount,
}

impl MonetaryEntry for Expense {
    fn amount(&self) -> &MonetaryAmount {
        &self.amount
    }

    fn date(&self) -> NaiveDate {
        self.expense_date.date()
    }
}

/// Bare dated amount, for callers that only have the two fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryRecord {
    pub amount: MonetaryAmount,
    pub date: NaiveDate,
}

impl MonetaryRecord {
    pub fn new(amount: MonetaryAmount, date: NaiveDate) -> Self {
        Self { amount, date }
    }
}

impl MonetaryEntry for MonetaryRecord {
    fn amount(&self) -> &MonetaryAmount {
        &self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Inclusive date range; a missing bound leaves that side open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded on both sides
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    /// A single calendar day
    pub fn day(date: NaiveDate) -> Self {
        Self::between(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}
