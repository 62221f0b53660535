//! Warranty service - core business logic

use std::sync::Arc;

use badr_domain::{
    ExpiryFilter, Result, WarrantyConfig, WarrantyRecord, WarrantyStats, WarrantyStatus,
};
use chrono::NaiveDateTime;

use super::evaluator::{self, WarrantyThresholds};
use super::{filters, lifecycle};
use crate::clock::{Clock, SystemClock};

/// Warranty evaluation bound to a clock and a threshold pair
///
/// Each call reads the clock exactly once, so every record in a batch is
/// judged against the same instant.
pub struct WarrantyService {
    clock: Arc<dyn Clock>,
    thresholds: WarrantyThresholds,
}

impl WarrantyService {
    /// Create a new warranty service
    pub fn new(clock: Arc<dyn Clock>, thresholds: WarrantyThresholds) -> Self {
        Self { clock, thresholds }
    }

    /// Build from configuration using the system clock
    ///
    /// # Errors
    /// Returns `BadrError::Config` for inverted thresholds.
    pub fn from_config(config: &WarrantyConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(SystemClock), WarrantyThresholds::from_config(config)?))
    }

    /// Replace the clock, mostly for tests and replays
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn thresholds(&self) -> &WarrantyThresholds {
        &self.thresholds
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Evaluate one warranty as of now
    pub fn evaluate(&self, record: &WarrantyRecord) -> Result<WarrantyStatus> {
        evaluator::evaluate(record, self.clock.now(), &self.thresholds)
    }

    /// Evaluate a batch; failures stay per record
    pub fn evaluate_all(&self, records: &[WarrantyRecord]) -> Vec<Result<WarrantyStatus>> {
        let now = self.clock.now();
        records.iter().map(|record| evaluator::evaluate(record, now, &self.thresholds)).collect()
    }

    /// Dashboard counts for a batch
    pub fn summarize(&self, records: &[WarrantyRecord]) -> WarrantyStats {
        evaluator::summarize(records, self.clock.now(), &self.thresholds)
    }

    /// Records passing an expiry filter
    pub fn filter<'a>(
        &self,
        records: &'a [WarrantyRecord],
        filter: ExpiryFilter,
    ) -> Vec<&'a WarrantyRecord> {
        let now = self.clock.now();
        records
            .iter()
            .filter(|record| filters::matches(record, filter, now, &self.thresholds))
            .collect()
    }

    /// Active warranties within the warning window
    pub fn expiring<'a>(&self, records: &'a [WarrantyRecord]) -> Vec<&'a WarrantyRecord> {
        filters::expiring_within(records, self.thresholds.warning_days(), self.clock.now())
    }

    pub fn expired_unclaimed<'a>(&self, records: &'a [WarrantyRecord]) -> Vec<&'a WarrantyRecord> {
        filters::expired_unclaimed(records, self.clock.now())
    }

    /// File a claim now
    pub fn claim(
        &self,
        record: &WarrantyRecord,
        details: impl Into<String>,
    ) -> Result<WarrantyRecord> {
        lifecycle::claim(record, self.clock.now(), details)
    }
}
