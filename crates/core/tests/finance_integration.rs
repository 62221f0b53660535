//! Integration tests for multi-currency aggregation
//!
//! Sales and expenses are built the way the backend reports them and run
//! through [`FinancialAggregator`] at the shop rate.

mod support;

use badr_core::finance::{self, FinancialAggregator};
use badr_domain::{Currency, DateRange, ExchangeRate, FinancialSummary, ProfitOutcome, Sale};
use rust_decimal::Decimal;
use support::{amount, date, expense, sale};

fn shop_rate() -> ExchangeRate {
    ExchangeRate::new(Decimal::new(1500, 0)).unwrap()
}

// ============================================================================
// Normalization
// ============================================================================

/// Normalizing a USD amount, or an already-normalized one, changes nothing.
#[test]
fn test_normalization_is_idempotent() {
    let aggregator = FinancialAggregator::new(shop_rate());

    let usd = amount(Decimal::new(4250, 2), Currency::Usd);
    assert_eq!(aggregator.normalize(&usd), usd);

    let iqd = amount(Decimal::new(63_750, 0), Currency::Iqd);
    let once = aggregator.normalize(&iqd);
    assert_eq!(once.value(), Decimal::new(4250, 2));
    assert_eq!(aggregator.normalize(&once), once);
}

#[test]
fn test_convert_round_trips_whole_dinars() {
    let usd = amount(Decimal::new(12, 0), Currency::Usd);

    let iqd = finance::convert(&usd, Currency::Iqd, shop_rate());
    assert_eq!(iqd.value(), Decimal::new(18_000, 0));
    assert_eq!(finance::convert(&iqd, Currency::Usd, shop_rate()), usd);
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_empty_sales_aggregate_to_zero() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let summary = aggregator.aggregate(&Vec::<Sale>::new(), DateRange::all());

    assert_eq!(summary, FinancialSummary::default());
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total_normalized, Decimal::ZERO);
    assert_eq!(summary.average, Decimal::ZERO);
}

/// 150,000 IQD plus 100 USD at 1500 is 200 USD over two sales.
#[test]
fn test_mixed_currency_sales() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let sales = vec![
        sale(1, Decimal::new(150_000, 0), Currency::Iqd, date(2024, 4, 1)),
        sale(2, Decimal::new(100, 0), Currency::Usd, date(2024, 4, 1)),
    ];

    let summary = aggregator.aggregate(&sales, DateRange::all());

    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_normalized, Decimal::new(200, 0));
    assert_eq!(summary.average, Decimal::new(100, 0));
}

/// A sale at the very end of the period's last day is still inside it.
#[test]
fn test_period_bounds_include_whole_days() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let mut late = sale(3, Decimal::new(30, 0), Currency::Usd, date(2024, 4, 30));
    late.sale_date = date(2024, 4, 30).and_hms_opt(23, 59, 59).unwrap();

    let sales = vec![
        sale(1, Decimal::new(10, 0), Currency::Usd, date(2024, 3, 31)),
        sale(2, Decimal::new(20, 0), Currency::Usd, date(2024, 4, 1)),
        late,
        sale(4, Decimal::new(40, 0), Currency::Usd, date(2024, 5, 1)),
    ];

    let april =
        aggregator.aggregate(&sales, DateRange::between(date(2024, 4, 1), date(2024, 4, 30)));

    assert_eq!(april.count, 2);
    assert_eq!(april.total_normalized, Decimal::new(50, 0));
    assert_eq!(april.average, Decimal::new(25, 0));
}

#[test]
fn test_daily_counts_and_raw_totals() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let today = date(2024, 4, 10);
    let sales = vec![
        sale(1, Decimal::new(45_000, 0), Currency::Iqd, today),
        sale(2, Decimal::new(75, 0), Currency::Usd, today),
        sale(3, Decimal::new(15, 0), Currency::Usd, date(2024, 4, 9)),
    ];

    assert_eq!(aggregator.count_on(&sales, today), 2);

    let totals = aggregator.currency_totals(&sales, DateRange::day(today));
    assert_eq!(totals.iqd, Decimal::new(45_000, 0));
    assert_eq!(totals.usd, Decimal::new(75, 0));
    assert_eq!(totals.iqd_count + totals.usd_count, 2);
}

// ============================================================================
// Profit
// ============================================================================

#[test]
fn test_profit_report_over_month() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let april = DateRange::between(date(2024, 4, 1), date(2024, 4, 30));

    let sales = vec![
        sale(1, Decimal::new(600_000, 0), Currency::Iqd, date(2024, 4, 3)),
        sale(2, Decimal::new(250, 0), Currency::Usd, date(2024, 4, 20)),
    ];
    let expenses = vec![
        expense(1, Decimal::new(300_000, 0), Currency::Iqd, date(2024, 4, 5)),
        expense(2, Decimal::new(150, 0), Currency::Usd, date(2024, 4, 28)),
        expense(3, Decimal::new(999, 0), Currency::Usd, date(2024, 5, 2)),
    ];

    let report = aggregator.profit_report(&sales, &expenses, april);

    assert_eq!(report.revenue.total_normalized, Decimal::new(650, 0));
    assert_eq!(report.expenses.total_normalized, Decimal::new(350, 0));
    assert_eq!(report.expenses.count, 2);
    assert_eq!(report.net_profit, Decimal::new(300, 0));
    assert_eq!(report.outcome, ProfitOutcome::Profit);
    assert_eq!(finance::net_profit(&report.revenue, &report.expenses), report.net_profit);
}

#[test]
fn test_profit_report_break_even() {
    let aggregator = FinancialAggregator::new(shop_rate());
    let sales = vec![sale(1, Decimal::new(150_000, 0), Currency::Iqd, date(2024, 4, 3))];
    let expenses = vec![expense(1, Decimal::new(100, 0), Currency::Usd, date(2024, 4, 3))];

    let report = aggregator.profit_report(&sales, &expenses, DateRange::all());

    assert_eq!(report.net_profit, Decimal::ZERO);
    assert_eq!(report.outcome, ProfitOutcome::BreakEven);
}
