//! Statistics types for dashboard tiles and reports
//!
//! This module centralizes the summary structs the views render:
//! - Warranty bucket counts
//! - Normalized financial summaries
//! - Per-currency raw totals
//! - Revenue vs. expense profit report

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::warranty::WarrantyBucket;

/* -------------------------------------------------------------------------- */
/* Warranty Statistics */
/* -------------------------------------------------------------------------- */

/// Warranty counts across one evaluation pass
///
/// `expiring_30_days` covers both expiring buckets; `expiring_7_days` is the
/// urgent subset of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct WarrantyStats {
    /// Records that were evaluated (invalid records excluded)
    pub total: u64,
    pub active: u64,
    pub expiring_30_days: u64,
    pub expiring_7_days: u64,
    pub expired: u64,
    pub claimed: u64,
    pub void: u64,
    /// Records skipped because they failed validation
    pub invalid: u64,
}

impl WarrantyStats {
    /// Count one evaluated record
    pub fn record(&mut self, bucket: WarrantyBucket) {
        self.total += 1;
        match bucket {
            WarrantyBucket::Active => self.active += 1,
            WarrantyBucket::ExpiringMonth => self.expiring_30_days += 1,
            WarrantyBucket::ExpiringSoon => {
                self.expiring_30_days += 1;
                self.expiring_7_days += 1;
            }
            WarrantyBucket::Expired => self.expired += 1,
            WarrantyBucket::Claimed => self.claimed += 1,
            WarrantyBucket::Void => self.void += 1,
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Financial Summaries */
/* -------------------------------------------------------------------------- */

/// Normalized (USD) totals over a filtered set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct FinancialSummary {
    pub count: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub total_normalized: Decimal,
    /// `total_normalized / count`, or zero for an empty set
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub average: Decimal,
}

/// Raw per-currency sums before any conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CurrencyTotals {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub iqd: Decimal,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub usd: Decimal,
    pub iqd_count: u64,
    pub usd_count: u64,
}

/// Sign of a profit figure; the caller picks the display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ProfitOutcome {
    Profit,
    Loss,
    BreakEven,
}

impl ProfitOutcome {
    pub fn from_net(net: Decimal) -> Self {
        if net > Decimal::ZERO {
            Self::Profit
        } else if net < Decimal::ZERO {
            Self::Loss
        } else {
            Self::BreakEven
        }
    }
}

/// Revenue against expenses for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProfitReport {
    pub revenue: FinancialSummary,
    pub expenses: FinancialSummary,
    /// `revenue.total_normalized - expenses.total_normalized`
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub net_profit: Decimal,
    pub outcome: ProfitOutcome,
}
