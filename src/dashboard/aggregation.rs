//! Summary statistics and the per-day time series.

use serde::Serialize;
use time::{Date, Duration};

use crate::transaction::{Transaction, TransactionKind};

/// Totals computed over the period-filtered transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    /// Sum of income amounts in the period.
    pub total_income: i64,
    /// Sum of expense amounts in the period.
    pub total_expense: i64,
    /// `total_income - total_expense`. Can be negative.
    pub balance: i64,
    /// Number of transactions in the period.
    pub transaction_count: usize,
}

/// Compute the summary statistics for a period-filtered transaction list.
pub fn period_stats(filtered: &[Transaction]) -> PeriodStats {
    let mut total_income = 0;
    let mut total_expense = 0;

    for transaction in filtered {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expense += transaction.amount,
        }
    }

    PeriodStats {
        total_income,
        total_expense,
        balance: total_income - total_expense,
        transaction_count: filtered.len(),
    }
}

/// The all-time balance over the full, unfiltered transaction set.
///
/// Independent of the selected period by design: the dashboard shows this
/// next to the period-scoped [PeriodStats].
pub fn total_balance(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .map(|transaction| match transaction.kind {
            TransactionKind::Income => transaction.amount,
            TransactionKind::Expense => -transaction.amount,
        })
        .sum()
}

/// Income, expense, and net movement for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    /// The day the totals cover.
    pub date: Date,
    /// Sum of income amounts on that day.
    pub income: i64,
    /// Sum of expense amounts on that day.
    pub expense: i64,
    /// `income - expense` for that day.
    pub balance: i64,
}

/// How far back the daily series reaches when there is no period bound and
/// no transactions to take the earliest date from.
const EMPTY_SERIES_DAYS: i64 = 30;

/// One data point per calendar day from the period's start through `today`,
/// inclusive, with zero-filled buckets for days without transactions.
///
/// The series start is the period's lower bound when one exists. For the
/// unbounded period it falls back to the earliest date in the full
/// transaction set, or to 30 days before `today` when there are no
/// transactions at all.
///
/// Transactions whose date falls outside the enumerated range are silently
/// dropped rather than raising an error; with no upper bound on filtering
/// this is how future-dated transactions are kept out of the chart. If
/// `today` is somehow earlier than the series start the result is an empty
/// series, not an error.
pub fn daily_aggregates(
    transactions: &[Transaction],
    filtered: &[Transaction],
    start: Option<Date>,
    today: Date,
) -> Vec<DailyAggregate> {
    let series_start = match start {
        Some(start) => start,
        None => transactions
            .iter()
            .map(|transaction| transaction.date)
            .min()
            .unwrap_or(today - Duration::days(EMPTY_SERIES_DAYS)),
    };

    let mut days: Vec<DailyAggregate> = Vec::new();
    let mut day = series_start;
    while day <= today {
        days.push(DailyAggregate {
            date: day,
            income: 0,
            expense: 0,
            balance: 0,
        });
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }

    for transaction in filtered {
        let offset = (transaction.date - series_start).whole_days();
        if offset < 0 || offset >= days.len() as i64 {
            continue;
        }

        let bucket = &mut days[offset as usize];
        match transaction.kind {
            TransactionKind::Income => bucket.income += transaction.amount,
            TransactionKind::Expense => bucket.expense += transaction.amount,
        }
    }

    for bucket in &mut days {
        bucket.balance = bucket.income - bucket.expense;
    }

    days
}

/// A point on the period-relative balance curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    /// The day the running total is taken at.
    pub date: Date,
    /// Running sum of daily balances from the start of the series.
    pub balance: i64,
}

/// The running sum of daily balances, in the same ascending order as the
/// input series.
///
/// The sum starts from zero, not from the all-time balance before the
/// period, so the curve shows balance drift within the period rather than
/// absolute balance.
pub fn cumulative_balance(daily: &[DailyAggregate]) -> Vec<BalancePoint> {
    let mut running = 0;

    daily
        .iter()
        .map(|aggregate| {
            running += aggregate.balance;
            BalancePoint {
                date: aggregate.date,
                balance: running,
            }
        })
        .collect()
}
