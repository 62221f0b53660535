//! Shared test helpers for `badr-core` integration tests.
//!
//! Fixtures here pin the reference instant so every scenario is
//! deterministic regardless of when the suite runs.

#![allow(dead_code)]

use std::sync::Arc;

use badr_core::{FixedClock, WarrantyService, WarrantyThresholds};
use badr_domain::{Currency, Expense, MonetaryAmount, Sale, WarrantyRecord};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_time(NaiveTime::MIN)
}

/// Service frozen at `now` with the default 7/30 thresholds.
pub fn service_at(now: NaiveDateTime) -> WarrantyService {
    WarrantyService::new(Arc::new(FixedClock(now)), WarrantyThresholds::default())
}

/// Active warranty whose end date lands exactly `days` after `now`'s date.
///
/// Negative `days` produce an end date in the past.
pub fn warranty_ending_in(id: i64, now: NaiveDateTime, days: i64) -> WarrantyRecord {
    let end = now.date() + Duration::days(days);
    let start = end - Duration::days(365);
    WarrantyRecord::new(id, start, end)
}

pub fn amount(value: Decimal, currency: Currency) -> MonetaryAmount {
    MonetaryAmount::new(value, currency).expect("non-negative amount")
}

pub fn sale(id: i64, value: Decimal, currency: Currency, on: NaiveDate) -> Sale {
    Sale {
        id,
        customer_id: None,
        sale_date: on.and_time(NaiveTime::MIN),
        amount: amount(value, currency),
    }
}

pub fn expense(id: i64, value: Decimal, currency: Currency, on: NaiveDate) -> Expense {
    Expense {
        id,
        description: format!("expense {id}"),
        expense_date: on.and_hms_opt(12, 0, 0).expect("valid time"),
        amount: amount(value, currency),
    }
}
