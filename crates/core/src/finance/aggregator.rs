//! Financial aggregation over currency-tagged records
//!
//! Every sum is taken in USD after an explicit [`ExchangeRate`] conversion.
//! The rate is always a parameter; nothing in here knows the shop's rate.

use badr_domain::{
    Currency, CurrencyTotals, DateRange, ExchangeRate, FinancialSummary, MonetaryAmount,
    MonetaryEntry, ProfitOutcome, ProfitReport,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

/// Express `amount` in USD.
///
/// USD input comes back unchanged. The result is tagged USD, so normalizing
/// it again is a no-op rather than a second division.
pub fn normalize_to_usd(amount: &MonetaryAmount, rate: ExchangeRate) -> MonetaryAmount {
    amount.convert_to(Currency::Usd, rate)
}

/// Express `amount` in `target`.
pub fn convert(amount: &MonetaryAmount, target: Currency, rate: ExchangeRate) -> MonetaryAmount {
    amount.convert_to(target, rate)
}

/// Count, USD total and USD average of the records dated inside `range`.
///
/// The average of an empty selection is zero.
pub fn aggregate<T: MonetaryEntry>(
    records: &[T],
    rate: ExchangeRate,
    range: DateRange,
) -> FinancialSummary {
    let (count, total_normalized) = records
        .iter()
        .filter(|record| range.contains(record.date()))
        .fold((0_u64, Decimal::ZERO), |(count, total), record| {
            (count + 1, saturating_sum(total, normalize_to_usd(record.amount(), rate).value()))
        });

    let average =
        if count == 0 { Decimal::ZERO } else { total_normalized / Decimal::from(count) };

    debug!(
        count,
        total_normalized = %total_normalized,
        skipped = records.len() as u64 - count,
        "financial aggregate computed"
    );
    FinancialSummary { count, total_normalized, average }
}

/// Raw per-currency sums of the records dated inside `range`.
pub fn currency_totals<T: MonetaryEntry>(records: &[T], range: DateRange) -> CurrencyTotals {
    records.iter().filter(|record| range.contains(record.date())).fold(
        CurrencyTotals::default(),
        |mut totals, record| {
            let amount = record.amount();
            match amount.currency() {
                Currency::Iqd => {
                    totals.iqd = saturating_sum(totals.iqd, amount.value());
                    totals.iqd_count += 1;
                }
                Currency::Usd => {
                    totals.usd = saturating_sum(totals.usd, amount.value());
                    totals.usd_count += 1;
                }
            }
            totals
        },
    )
}

/// Number of records dated on `date`.
pub fn count_on<T: MonetaryEntry>(records: &[T], date: NaiveDate) -> u64 {
    records.iter().filter(|record| record.date() == date).count() as u64
}

/// Positive for profit, negative for loss.
pub fn net_profit(revenue: &FinancialSummary, expenses: &FinancialSummary) -> Decimal {
    let (revenue, expenses) = (revenue.total_normalized, expenses.total_normalized);
    revenue.checked_sub(expenses).unwrap_or(if revenue > expenses {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Revenue against expenses over the same period and rate.
pub fn profit_report<R: MonetaryEntry, E: MonetaryEntry>(
    revenue: &[R],
    expenses: &[E],
    rate: ExchangeRate,
    range: DateRange,
) -> ProfitReport {
    let revenue = aggregate(revenue, rate, range);
    let expenses = aggregate(expenses, rate, range);
    let net_profit = net_profit(&revenue, &expenses);

    ProfitReport { revenue, expenses, net_profit, outcome: ProfitOutcome::from_net(net_profit) }
}

// Totals stop at Decimal::MAX, matching MonetaryAmount::convert_to
fn saturating_sum(total: Decimal, value: Decimal) -> Decimal {
    total.checked_add(value).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use badr_domain::MonetaryRecord;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rate() -> ExchangeRate {
        ExchangeRate::new(Decimal::new(1500, 0)).unwrap()
    }

    fn iqd(value: i64, on: NaiveDate) -> MonetaryRecord {
        MonetaryRecord::new(MonetaryAmount::iqd(Decimal::new(value, 0)).unwrap(), on)
    }

    fn usd(cents: i64, on: NaiveDate) -> MonetaryRecord {
        MonetaryRecord::new(MonetaryAmount::usd(Decimal::new(cents, 2)).unwrap(), on)
    }

    #[test]
    fn usd_passes_through() {
        let amount = MonetaryAmount::usd(Decimal::new(1999, 2)).unwrap();
        assert_eq!(normalize_to_usd(&amount, rate()), amount);
    }

    #[test]
    fn iqd_is_divided_once() {
        let amount = MonetaryAmount::iqd(Decimal::new(150_000, 0)).unwrap();

        let once = normalize_to_usd(&amount, rate());
        let twice = normalize_to_usd(&once, rate());

        assert_eq!(once.value(), Decimal::new(100, 0));
        assert_eq!(once.currency(), Currency::Usd);
        assert_eq!(twice, once);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let records: Vec<MonetaryRecord> = Vec::new();
        let summary = aggregate(&records, rate(), DateRange::all());

        assert_eq!(summary, FinancialSummary::default());
        assert_eq!(summary.average, Decimal::ZERO);
    }

    #[test]
    fn period_filter_is_inclusive() {
        let records = vec![
            usd(1000, date(2024, 1, 1)),
            usd(2000, date(2024, 1, 15)),
            usd(4000, date(2024, 1, 31)),
            usd(8000, date(2024, 2, 1)),
        ];

        let january = aggregate(
            &records,
            rate(),
            DateRange::between(date(2024, 1, 1), date(2024, 1, 31)),
        );
        assert_eq!(january.count, 3);
        assert_eq!(january.total_normalized, Decimal::new(70, 0));

        let from_mid = aggregate(&records, rate(), DateRange::new(Some(date(2024, 1, 15)), None));
        assert_eq!(from_mid.count, 3);
        assert_eq!(from_mid.total_normalized, Decimal::new(140, 0));
    }

    #[test]
    fn currency_totals_keep_raw_values() {
        let records = vec![
            iqd(150_000, date(2024, 1, 1)),
            iqd(30_000, date(2024, 1, 2)),
            usd(1050, date(2024, 1, 2)),
        ];
        let totals = currency_totals(&records, DateRange::all());

        assert_eq!(totals.iqd, Decimal::new(180_000, 0));
        assert_eq!(totals.iqd_count, 2);
        assert_eq!(totals.usd, Decimal::new(1050, 2));
        assert_eq!(totals.usd_count, 1);
    }

    #[test]
    fn count_on_matches_calendar_day() {
        let records = vec![
            usd(100, date(2024, 1, 1)),
            usd(100, date(2024, 1, 2)),
            iqd(1500, date(2024, 1, 2)),
        ];
        assert_eq!(count_on(&records, date(2024, 1, 2)), 2);
        assert_eq!(count_on(&records, date(2024, 1, 3)), 0);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let on = date(2024, 1, 1);
        let records = vec![
            MonetaryRecord::new(MonetaryAmount::usd(Decimal::MAX).unwrap(), on),
            usd(100, on),
            MonetaryRecord::new(MonetaryAmount::iqd(Decimal::MAX).unwrap(), on),
            iqd(1, on),
        ];

        let summary = aggregate(&records, rate(), DateRange::all());
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total_normalized, Decimal::MAX);

        let totals = currency_totals(&records, DateRange::all());
        assert_eq!(totals.usd, Decimal::MAX);
        assert_eq!(totals.iqd, Decimal::MAX);
        assert_eq!(totals.usd_count, 2);
    }

    #[test]
    fn net_profit_spans_full_range() {
        let ceiling =
            FinancialSummary { count: 1, total_normalized: Decimal::MAX, average: Decimal::MAX };
        let nothing = FinancialSummary::default();

        assert_eq!(net_profit(&ceiling, &nothing), Decimal::MAX);
        assert_eq!(net_profit(&nothing, &ceiling), Decimal::MIN);
        assert_eq!(net_profit(&ceiling, &ceiling), Decimal::ZERO);
    }

    #[test]
    fn profit_report_signs_net() {
        let revenue = vec![iqd(300_000, date(2024, 1, 5))];
        let expenses = vec![usd(25_000, date(2024, 1, 6))];

        let report = profit_report(&revenue, &expenses, rate(), DateRange::all());

        assert_eq!(report.revenue.total_normalized, Decimal::new(200, 0));
        assert_eq!(report.expenses.total_normalized, Decimal::new(250, 0));
        assert_eq!(report.net_profit, Decimal::new(-50, 0));
        assert_eq!(report.outcome, ProfitOutcome::Loss);
    }
}
