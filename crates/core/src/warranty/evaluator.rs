//! Warranty status evaluation
//!
//! Pure classification of a [`WarrantyRecord`] at a reference instant into a
//! bucket, a color tag, an Arabic message and a day count.
//!
//! Precedence, first match wins:
//! 1. persisted `claimed` → `claimed`
//! 2. persisted `void` → `void`
//! 3. no days left → `expired`
//! 4. `days <= urgent_days` → `expiring_soon`
//! 5. `days <= warning_days` → `expiring_month`
//! 6. otherwise → `active`

use badr_domain::{
    BadrError, Result, StatusColor, WarrantyBucket, WarrantyConfig, WarrantyRecord,
    WarrantyState, WarrantyStats, WarrantyStatus,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, warn};

const SECONDS_PER_DAY: i64 = 86_400;

const MSG_CLAIMED: &str = "تم المطالبة بالضمان";
const MSG_VOID: &str = "ضمان ملغي";
const MSG_EXPIRED: &str = "الضمان منتهي";
const MSG_ACTIVE: &str = "الضمان ساري";

/// Day thresholds separating the expiring buckets (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarrantyThresholds {
    urgent_days: u32,
    warning_days: u32,
}

impl WarrantyThresholds {
    /// # Errors
    /// Returns `BadrError::InvalidInput` when `urgent_days > warning_days`.
    pub fn new(urgent_days: u32, warning_days: u32) -> Result<Self> {
        if urgent_days > warning_days {
            return Err(BadrError::InvalidInput(format!(
                "urgent threshold ({urgent_days}) exceeds warning threshold ({warning_days})"
            )));
        }
        Ok(Self { urgent_days, warning_days })
    }

    /// # Errors
    /// Returns `BadrError::Config` for inverted thresholds.
    pub fn from_config(config: &WarrantyConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.urgent_days, config.warning_days)
    }

    /// Day count at or below which a warranty is `expiring_soon`
    pub fn urgent_days(&self) -> u32 {
        self.urgent_days
    }

    /// Day count at or below which a warranty is `expiring_month`
    pub fn warning_days(&self) -> u32 {
        self.warning_days
    }
}

impl Default for WarrantyThresholds {
    fn default() -> Self {
        let config = WarrantyConfig::default();
        Self { urgent_days: config.urgent_days, warning_days: config.warning_days }
    }
}

/// Whole days from `now` until the start of `end_date`, floored, never negative.
pub fn days_remaining(end_date: NaiveDate, now: NaiveDateTime) -> u32 {
    let end = end_date.and_time(NaiveTime::MIN);
    let days = end.signed_duration_since(now).num_seconds().div_euclid(SECONDS_PER_DAY);
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Classify one warranty as of `now`.
///
/// # Errors
/// Returns `BadrError::InvalidRecord` when the record ends before it starts.
pub fn evaluate(
    record: &WarrantyRecord,
    now: NaiveDateTime,
    thresholds: &WarrantyThresholds,
) -> Result<WarrantyStatus> {
    if record.end_date < record.start_date {
        return Err(BadrError::InvalidRecord(format!(
            "warranty {} ends on {} before it starts on {}",
            record.id, record.end_date, record.start_date
        )));
    }

    let days = days_remaining(record.end_date, now);
    let (status, color, message) = match record.status {
        WarrantyState::Claimed => {
            (WarrantyBucket::Claimed, StatusColor::Blue, MSG_CLAIMED.to_string())
        }
        WarrantyState::Void => (WarrantyBucket::Void, StatusColor::Gray, MSG_VOID.to_string()),
        _ if days == 0 => (WarrantyBucket::Expired, StatusColor::Red, MSG_EXPIRED.to_string()),
        _ if days <= thresholds.urgent_days => (
            WarrantyBucket::ExpiringSoon,
            StatusColor::Red,
            format!("ينتهي الضمان خلال {days} أيام"),
        ),
        _ if days <= thresholds.warning_days => (
            WarrantyBucket::ExpiringMonth,
            StatusColor::Yellow,
            format!("ينتهي الضمان خلال {days} يوم"),
        ),
        _ => (WarrantyBucket::Active, StatusColor::Green, MSG_ACTIVE.to_string()),
    };

    Ok(WarrantyStatus { status, color, message, days_remaining: days })
}

/// Count buckets across `records`, all judged against the same `now`.
///
/// Invalid records are counted in `invalid` and otherwise skipped.
pub fn summarize(
    records: &[WarrantyRecord],
    now: NaiveDateTime,
    thresholds: &WarrantyThresholds,
) -> WarrantyStats {
    let mut stats = WarrantyStats::default();

    for record in records {
        match evaluate(record, now, thresholds) {
            Ok(status) => stats.record(status.status),
            Err(err) => {
                warn!(warranty_id = %record.id, error = %err, "skipping invalid warranty record");
                stats.invalid += 1;
            }
        }
    }

    debug!(
        total = stats.total,
        active = stats.active,
        expiring_30_days = stats.expiring_30_days,
        expired = stats.expired,
        invalid = stats.invalid,
        "warranty summary computed"
    );
    stats
}
