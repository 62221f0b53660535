//! Warranty lifecycle rules
//!
//! The backend owns persistence; these functions compute the record it should
//! store next. Inputs are never mutated.

use badr_domain::constants::DAYS_PER_WARRANTY_MONTH;
use badr_domain::{BadrError, ClaimEntry, Result, WarrantyRecord, WarrantyState};
use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::info;

/// End date of a warranty starting on `start` and lasting `months`.
///
/// A warranty month is a flat 30 days.
///
/// # Errors
/// Returns `BadrError::InvalidInput` if the result is out of the date range.
pub fn warranty_end_date(start: NaiveDate, months: u32) -> Result<NaiveDate> {
    let days = u64::from(months) * DAYS_PER_WARRANTY_MONTH;
    start.checked_add_days(Days::new(days)).ok_or_else(|| {
        BadrError::InvalidInput(format!("warranty of {months} months from {start} overflows"))
    })
}

/// Record a claim filed at `at` and append it to the claim history.
///
/// Only persisted `active` warranties accept claims; `claimed` and `void` are
/// terminal.
///
/// # Errors
/// Returns `BadrError::InvalidInput` when the warranty does not accept claims.
pub fn claim(
    record: &WarrantyRecord,
    at: NaiveDateTime,
    details: impl Into<String>,
) -> Result<WarrantyRecord> {
    if record.status != WarrantyState::Active {
        return Err(BadrError::InvalidInput(format!(
            "warranty {} is {} and cannot be claimed",
            record.id, record.status
        )));
    }

    let mut next = record.clone();
    next.status = WarrantyState::Claimed;
    next.claim_count = record.claim_count.saturating_add(1);
    next.last_claim_date = Some(at.date());
    next.claim_history.push(ClaimEntry {
        date: at,
        details: details.into(),
        claim_number: next.claim_count,
    });

    info!(warranty_id = %record.id, claim_number = next.claim_count, "warranty claimed");
    Ok(next)
}

/// Push the end date out by `months` (30 days each).
///
/// # Errors
/// Returns `BadrError::InvalidInput` for a zero extension, a terminal
/// warranty, or an out-of-range result.
pub fn extend(record: &WarrantyRecord, months: u32) -> Result<WarrantyRecord> {
    if months == 0 {
        return Err(BadrError::InvalidInput("extension must be at least one month".to_string()));
    }
    if record.status.is_terminal() {
        return Err(BadrError::InvalidInput(format!(
            "warranty {} is {} and cannot be extended",
            record.id, record.status
        )));
    }

    let mut next = record.clone();
    next.end_date = warranty_end_date(record.end_date, months)?;
    next.warranty_period_months = record.warranty_period_months.saturating_add(months);
    if next.status == WarrantyState::Expired {
        next.status = WarrantyState::Active;
    }

    info!(
        warranty_id = %record.id,
        months,
        new_end_date = %next.end_date,
        "warranty extended"
    );
    Ok(next)
}
