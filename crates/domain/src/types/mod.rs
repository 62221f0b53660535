//! Domain types and models

pub mod ledger;
pub mod money;
pub mod stats;
pub mod warranty;

// Re-export for convenience
pub use ledger::{DateRange, Expense, MonetaryEntry, MonetaryRecord, Sale};
pub use money::{Currency, ExchangeRate, MonetaryAmount};
pub use stats::{CurrencyTotals, FinancialSummary, ProfitOutcome, ProfitReport, WarrantyStats};
pub use warranty::{
    ClaimEntry, ExpiryFilter, StatusColor, WarrantyBucket, WarrantyId, WarrantyRecord,
    WarrantyState, WarrantyStatus,
};
