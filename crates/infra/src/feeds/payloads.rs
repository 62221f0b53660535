//! Raw REST payloads and their validation into domain types
//!
//! Payload structs mirror the backend's `to_dict()` output loosely: every
//! field the backend may omit or null is optional here, and the checks live
//! in `into_record`.

use badr_domain::constants::{DEFAULT_WARRANTY_PERIOD_MONTHS, DEFAULT_WARRANTY_TYPE};
use badr_domain::{
    BadrError, ClaimEntry, Currency, Expense, MonetaryAmount, Result, Sale, WarrantyId,
    WarrantyRecord, WarrantyState,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::dates;

/// A backend payload that validates into one domain record
pub trait FeedPayload: DeserializeOwned {
    type Record;

    /// Feed name used in logs and error messages
    const FEED: &'static str;

    /// # Errors
    /// Returns `BadrError::InvalidRecord` for missing or malformed fields and
    /// `BadrError::InvalidCurrency` for unknown currency tags.
    fn into_record(self) -> Result<Self::Record>;
}

/// One element of `GET /api/warranties`
#[derive(Debug, Clone, Deserialize)]
pub struct WarrantyPayload {
    pub id: WarrantyId,
    pub product_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub warranty_type: Option<String>,
    pub warranty_period_months: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub claim_count: Option<u32>,
    pub last_claim_date: Option<String>,
    pub claim_history: Option<Vec<ClaimEntryPayload>>,
}

/// One entry of a warranty's `claim_history`
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimEntryPayload {
    pub date: Option<String>,
    pub details: Option<String>,
    pub claim_number: Option<u32>,
}

impl ClaimEntryPayload {
    /// Entries without a number take their 1-based position in the history.
    fn into_entry(self, position: usize, label: &str) -> Result<ClaimEntry> {
        let field = format!("claim_history[{position}].date");
        let date = required_datetime(self.date.as_deref(), label, &field)?;
        let claim_number = match self.claim_number {
            Some(number) => number,
            None => u32::try_from(position + 1).map_err(|_| {
                BadrError::InvalidRecord(format!("{label}: claim history too long"))
            })?,
        };

        Ok(ClaimEntry { date, details: self.details.unwrap_or_default(), claim_number })
    }
}

impl FeedPayload for WarrantyPayload {
    type Record = WarrantyRecord;

    const FEED: &'static str = "warranties";

    fn into_record(self) -> Result<WarrantyRecord> {
        let label = format!("warranty {}", self.id);
        let start_date = required_date(self.start_date.as_deref(), &label, "start_date")?;
        let end_date = required_date(self.end_date.as_deref(), &label, "end_date")?;

        let status = match self.status.as_deref() {
            None => WarrantyState::default(),
            Some(raw) => raw
                .parse::<WarrantyState>()
                .map_err(|e| BadrError::InvalidRecord(format!("{label}: {e}")))?,
        };

        let last_claim_date = match self.last_claim_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(dates::parse_date(raw).map_err(|reason| {
                BadrError::InvalidRecord(format!("{label}: last_claim_date {reason}"))
            })?),
        };

        let claim_history = self
            .claim_history
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(position, entry)| entry.into_entry(position, &label))
            .collect::<Result<Vec<_>>>()?;

        Ok(WarrantyRecord {
            id: self.id,
            product_name: self.product_name,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            warranty_type: self.warranty_type.unwrap_or_else(|| DEFAULT_WARRANTY_TYPE.to_string()),
            warranty_period_months: self
                .warranty_period_months
                .unwrap_or(DEFAULT_WARRANTY_PERIOD_MONTHS),
            start_date,
            end_date,
            status,
            claim_count: self.claim_count.unwrap_or(0),
            last_claim_date,
            claim_history,
        })
    }
}

/// One element of `GET /api/sales`
#[derive(Debug, Clone, Deserialize)]
pub struct SalePayload {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub sale_date: Option<String>,
    #[serde(alias = "amount")]
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,
}

impl FeedPayload for SalePayload {
    type Record = Sale;

    const FEED: &'static str = "sales";

    fn into_record(self) -> Result<Sale> {
        let label = format!("sale {}", self.id);
        let sale_date = required_datetime(self.sale_date.as_deref(), &label, "sale_date")?;
        let amount = monetary_amount(self.total_amount, self.currency.as_deref(), &label)?;

        Ok(Sale { id: self.id, customer_id: self.customer_id, sale_date, amount })
    }
}

/// One element of `GET /api/expenses`
#[derive(Debug, Clone, Deserialize)]
pub struct ExpensePayload {
    pub id: i64,
    pub description: Option<String>,
    pub expense_date: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

impl FeedPayload for ExpensePayload {
    type Record = Expense;

    const FEED: &'static str = "expenses";

    fn into_record(self) -> Result<Expense> {
        let label = format!("expense {}", self.id);
        let expense_date =
            required_datetime(self.expense_date.as_deref(), &label, "expense_date")?;
        let amount = monetary_amount(self.amount, self.currency.as_deref(), &label)?;

        Ok(Expense {
            id: self.id,
            description: self.description.unwrap_or_default(),
            expense_date,
            amount,
        })
    }
}

fn required_datetime(value: Option<&str>, label: &str, field: &str) -> Result<NaiveDateTime> {
    let raw = value.ok_or_else(|| BadrError::InvalidRecord(format!("{label}: {field} missing")))?;
    dates::parse_datetime(raw)
        .map_err(|reason| BadrError::InvalidRecord(format!("{label}: {field} {reason}")))
}

fn required_date(value: Option<&str>, label: &str, field: &str) -> Result<NaiveDate> {
    required_datetime(value, label, field).map(|datetime| datetime.date())
}

/// An unknown currency tag surfaces as `InvalidCurrency`, not `InvalidRecord`.
fn monetary_amount(
    value: Option<Decimal>,
    currency: Option<&str>,
    label: &str,
) -> Result<MonetaryAmount> {
    let value = value.ok_or_else(|| BadrError::InvalidRecord(format!("{label}: amount missing")))?;
    let currency = currency
        .ok_or_else(|| BadrError::InvalidRecord(format!("{label}: currency missing")))?
        .parse::<Currency>()?;

    MonetaryAmount::new(value, currency)
        .map_err(|e| BadrError::InvalidRecord(format!("{label}: {e}")))
}
