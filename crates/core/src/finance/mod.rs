//! Multi-currency financial aggregation

pub mod aggregator;
pub mod service;

pub use aggregator::{
    aggregate, convert, count_on, currency_totals, net_profit, normalize_to_usd, profit_report,
};
pub use service::FinancialAggregator;
