//! The aggregation engine behind the dashboard.
//!
//! Given a snapshot of the transaction set, a selected period, and the
//! category catalog, [project] recomputes every derived view from scratch:
//! the filtered transaction list, summary statistics, the per-day series,
//! and the per-category breakdowns. Nothing here mutates the snapshot or
//! keeps state between calls, so the outputs are valid exactly until the
//! next change to the inputs.

mod aggregation;
mod breakdown;

pub use aggregation::{
    BalancePoint, DailyAggregate, PeriodStats, cumulative_balance, daily_aggregates, period_stats,
    total_balance,
};
pub use breakdown::{CategoryAggregate, CategoryBreakdown, category_breakdown};

use serde::Serialize;
use time::Date;

use crate::{
    category::CategoryCatalog,
    period::Period,
    transaction::{Transaction, transactions_in_period},
};

/// Everything the presentation layer needs to render the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// The transactions in the selected period, date descending.
    pub filtered_transactions: Vec<Transaction>,
    /// The full transaction set the overview was computed from.
    pub all_transactions: Vec<Transaction>,
    /// Summary statistics over the filtered list.
    pub stats: PeriodStats,
    /// All-time balance over the unfiltered set, independent of the period.
    pub total_balance: i64,
    /// One aggregate per calendar day from the period start through today.
    pub daily: Vec<DailyAggregate>,
    /// Per-category breakdowns of the period's expenses and income.
    pub categories: CategoryBreakdown,
}

/// Project the transaction set into the complete dashboard view for one
/// period.
///
/// Pure and deterministic: the input is borrowed read-only and every output
/// is freshly built. Call it again whenever a transaction is added or
/// removed or the period changes.
pub fn project(
    transactions: &[Transaction],
    period: Period,
    today: Date,
    catalog: &CategoryCatalog,
) -> Overview {
    let start = period.start_date(today);
    let filtered = transactions_in_period(transactions, start);

    let stats = period_stats(&filtered);
    let total_balance = total_balance(transactions);
    let daily = daily_aggregates(transactions, &filtered, start, today);
    let categories = category_breakdown(&filtered, catalog);

    Overview {
        stats,
        total_balance,
        daily,
        categories,
        filtered_transactions: filtered,
        all_transactions: transactions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::CategoryCatalog,
        period::Period,
        transaction::{TransactionKind, test_utils::transaction},
    };

    use super::project;

    fn sample_set() -> Vec<crate::transaction::Transaction> {
        vec![
            transaction(1000, TransactionKind::Income, "salary", date!(2024 - 01 - 01)),
            transaction(400, TransactionKind::Expense, "food", date!(2024 - 01 - 01)),
            transaction(100, TransactionKind::Expense, "unknown_cat", date!(2024 - 01 - 02)),
        ]
    }

    #[test]
    fn unbounded_overview_matches_the_reference_scenario() {
        let catalog = CategoryCatalog::built_in();
        let transactions = sample_set();

        let overview = project(&transactions, Period::All, date!(2024 - 01 - 02), &catalog);

        assert_eq!(overview.stats.total_income, 1000);
        assert_eq!(overview.stats.total_expense, 500);
        assert_eq!(overview.stats.balance, 500);
        assert_eq!(overview.stats.transaction_count, 3);

        assert_eq!(overview.categories.expenses.len(), 2);
        assert_eq!(overview.categories.expenses[0].category_id, "food");
        assert_eq!(overview.categories.expenses[0].percentage, 80.0);
        assert_eq!(overview.categories.expenses[1].category_id, "unknown_cat");
        assert_eq!(overview.categories.expenses[1].percentage, 20.0);
        assert_eq!(overview.categories.expenses[1].category_name, "unknown_cat");
    }

    #[test]
    fn empty_month_overview_is_zeroed_but_fully_enumerated() {
        let catalog = CategoryCatalog::built_in();
        let today = date!(2024 - 01 - 15);

        let overview = project(&[], Period::Month, today, &catalog);

        assert_eq!(overview.stats.total_income, 0);
        assert_eq!(overview.stats.total_expense, 0);
        assert_eq!(overview.stats.balance, 0);
        assert_eq!(overview.stats.transaction_count, 0);

        assert_eq!(overview.daily.len(), 15);
        assert_eq!(overview.daily[0].date, date!(2024 - 01 - 01));
        assert_eq!(overview.daily[14].date, today);
        assert!(
            overview
                .daily
                .iter()
                .all(|bucket| bucket.income == 0 && bucket.expense == 0)
        );

        assert!(overview.categories.expenses.is_empty());
        assert!(overview.categories.income.is_empty());
    }

    #[test]
    fn total_balance_does_not_depend_on_the_period() {
        let catalog = CategoryCatalog::built_in();
        let transactions = sample_set();
        let today = date!(2024 - 08 - 07);

        let month = project(&transactions, Period::Month, today, &catalog);
        let all = project(&transactions, Period::All, today, &catalog);

        assert_eq!(month.total_balance, all.total_balance);
        assert_eq!(all.total_balance, 500);
        // The period-scoped stats do change: nothing falls in this month.
        assert_eq!(month.stats.transaction_count, 0);
        assert_eq!(all.stats.transaction_count, 3);
    }

    #[test]
    fn filtered_and_full_lists_are_both_exposed() {
        let catalog = CategoryCatalog::built_in();
        let transactions = sample_set();

        let overview = project(&transactions, Period::Day, date!(2024 - 01 - 02), &catalog);

        assert_eq!(overview.filtered_transactions.len(), 1);
        assert_eq!(overview.all_transactions.len(), 3);
    }
}
