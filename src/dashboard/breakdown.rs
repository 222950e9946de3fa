//! Per-category breakdowns of the period's income and expenses.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    category::CategoryCatalog,
    transaction::{Transaction, TransactionKind},
};

/// Totals for one category within the selected period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    /// The raw category id the group was keyed by.
    pub category_id: String,
    /// Resolved display name, or the raw id for an unknown category.
    pub category_name: String,
    /// Resolved chart color.
    pub color: String,
    /// Resolved display glyph.
    pub icon: String,
    /// Sum of amounts in the group.
    pub total: i64,
    /// Number of transactions in the group.
    pub count: usize,
    /// The group's share of its kind's grand total, in percent.
    ///
    /// Zero when the grand total is zero; never NaN.
    pub percentage: f64,
}

/// The category breakdowns for both transaction kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Expense categories, largest total first.
    pub expenses: Vec<CategoryAggregate>,
    /// Income categories, largest total first.
    pub income: Vec<CategoryAggregate>,
}

/// Group the period-filtered transactions by category, independently for
/// each kind.
pub fn category_breakdown(
    filtered: &[Transaction],
    catalog: &CategoryCatalog,
) -> CategoryBreakdown {
    CategoryBreakdown {
        expenses: aggregates_for_kind(filtered, TransactionKind::Expense, catalog),
        income: aggregates_for_kind(filtered, TransactionKind::Income, catalog),
    }
}

#[derive(Default)]
struct CategoryTotals {
    total: i64,
    count: usize,
}

fn aggregates_for_kind(
    filtered: &[Transaction],
    kind: TransactionKind,
    catalog: &CategoryCatalog,
) -> Vec<CategoryAggregate> {
    let mut grand_total = 0;
    let mut groups: HashMap<&str, CategoryTotals> = HashMap::new();

    for transaction in filtered.iter().filter(|t| t.kind == kind) {
        grand_total += transaction.amount;
        let entry = groups.entry(transaction.category_id.as_str()).or_default();
        entry.total += transaction.amount;
        entry.count += 1;
    }

    let mut aggregates: Vec<CategoryAggregate> = groups
        .into_iter()
        .map(|(category_id, totals)| {
            let display = catalog.resolve(category_id);
            let percentage = if grand_total > 0 {
                totals.total as f64 / grand_total as f64 * 100.0
            } else {
                0.0
            };

            CategoryAggregate {
                category_id: category_id.to_owned(),
                category_name: display.name,
                color: display.color,
                icon: display.icon,
                total: totals.total,
                count: totals.count,
                percentage,
            }
        })
        .collect();

    aggregates.sort_by(|a, b| b.total.cmp(&a.total));

    aggregates
}
