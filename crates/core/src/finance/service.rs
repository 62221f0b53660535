//! Financial aggregation bound to one exchange rate

use badr_domain::{
    CurrencyTotals, DateRange, ExchangeRate, FinancialSummary, MonetaryAmount, MonetaryEntry,
    PricingConfig, ProfitReport, Result,
};
use chrono::NaiveDate;

use super::aggregator;

/// Aggregates sales and expenses at a single configured rate
///
/// Every summary produced by one aggregator uses the same rate, so revenue
/// and expense totals stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialAggregator {
    rate: ExchangeRate,
}

impl FinancialAggregator {
    pub fn new(rate: ExchangeRate) -> Self {
        Self { rate }
    }

    /// # Errors
    /// Returns `BadrError::Config` for a zero or negative rate.
    pub fn from_config(config: &PricingConfig) -> Result<Self> {
        Ok(Self::new(config.exchange_rate()?))
    }

    pub fn rate(&self) -> ExchangeRate {
        self.rate
    }

    /// Express one amount in USD
    pub fn normalize(&self, amount: &MonetaryAmount) -> MonetaryAmount {
        aggregator::normalize_to_usd(amount, self.rate)
    }

    pub fn aggregate<T: MonetaryEntry>(&self, records: &[T], range: DateRange) -> FinancialSummary {
        aggregator::aggregate(records, self.rate, range)
    }

    pub fn currency_totals<T: MonetaryEntry>(
        &self,
        records: &[T],
        range: DateRange,
    ) -> CurrencyTotals {
        aggregator::currency_totals(records, range)
    }

    pub fn count_on<T: MonetaryEntry>(&self, records: &[T], date: NaiveDate) -> u64 {
        aggregator::count_on(records, date)
    }

    /// Revenue against expenses for the same period
    pub fn profit_report<R: MonetaryEntry, E: MonetaryEntry>(
        &self,
        revenue: &[R],
        expenses: &[E],
        range: DateRange,
    ) -> ProfitReport {
        aggregator::profit_report(revenue, expenses, self.rate, range)
    }
}

impl Default for FinancialAggregator {
    fn default() -> Self {
        Self::new(ExchangeRate::default())
    }
}
