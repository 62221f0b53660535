//! Expiry filters used by the warranty list and dashboard

use badr_domain::{ExpiryFilter, WarrantyRecord, WarrantyState};
use chrono::NaiveDateTime;

use super::evaluator::{days_remaining, WarrantyThresholds};

/// Whether `record` passes `filter` as of `now`.
///
/// Filters look at the day count only, independent of the persisted state.
pub fn matches(
    record: &WarrantyRecord,
    filter: ExpiryFilter,
    now: NaiveDateTime,
    thresholds: &WarrantyThresholds,
) -> bool {
    let days = days_remaining(record.end_date, now);
    match filter {
        ExpiryFilter::All => true,
        ExpiryFilter::ExpiringWarning => days > 0 && days <= thresholds.warning_days(),
        ExpiryFilter::ExpiringUrgent => days > 0 && days <= thresholds.urgent_days(),
        ExpiryFilter::Expired => days == 0,
    }
}

/// Active warranties with `0 < days_remaining <= days`.
pub fn expiring_within(
    records: &[WarrantyRecord],
    days: u32,
    now: NaiveDateTime,
) -> Vec<&WarrantyRecord> {
    records
        .iter()
        .filter(|record| record.status == WarrantyState::Active)
        .filter(|record| {
            let remaining = days_remaining(record.end_date, now);
            remaining > 0 && remaining <= days
        })
        .collect()
}

/// Warranties still stored as active although their end date has passed.
pub fn expired_unclaimed(records: &[WarrantyRecord], now: NaiveDateTime) -> Vec<&WarrantyRecord> {
    records
        .iter()
        .filter(|record| {
            record.status == WarrantyState::Active && days_remaining(record.end_date, now) == 0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    /// End dates chosen to land 0, 5, 20 and 90 days after `now`.
    fn fixtures() -> Vec<WarrantyRecord> {
        vec![
            WarrantyRecord::new(1, date(2023, 1, 1), date(2024, 1, 1)),
            WarrantyRecord::new(2, date(2023, 1, 1), date(2024, 1, 6)),
            WarrantyRecord::new(3, date(2023, 1, 1), date(2024, 1, 21)),
            WarrantyRecord::new(4, date(2023, 1, 1), date(2024, 3, 31)),
            WarrantyRecord::new(5, date(2023, 1, 1), date(2024, 1, 6))
                .with_status(WarrantyState::Claimed),
        ]
    }

    fn ids(records: &[&WarrantyRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn filters_partition_by_day_count() {
        let records = fixtures();
        let thresholds = WarrantyThresholds::default();
        let pick = |filter| {
            records
                .iter()
                .filter(|r| matches(r, filter, now(), &thresholds))
                .map(|r| r.id.to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(pick(ExpiryFilter::All).len(), 5);
        assert_eq!(pick(ExpiryFilter::Expired), vec!["1"]);
        assert_eq!(pick(ExpiryFilter::ExpiringUrgent), vec!["2", "5"]);
        assert_eq!(pick(ExpiryFilter::ExpiringWarning), vec!["2", "3", "5"]);
    }

    #[test]
    fn expiring_within_skips_non_active() {
        let records = fixtures();
        assert_eq!(ids(&expiring_within(&records, 30, now())), vec!["2", "3"]);
        assert_eq!(ids(&expiring_within(&records, 7, now())), vec!["2"]);
    }

    #[test]
    fn expired_unclaimed_lists_stale_active_records() {
        let records = fixtures();
        assert_eq!(ids(&expired_unclaimed(&records, now())), vec!["1"]);
    }
}
