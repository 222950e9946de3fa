//! Display ordering and day grouping for the transaction history view.

use time::Date;

use super::Transaction;

/// Order transactions the way the history view lists them: by date
/// descending, then by creation time descending within a day.
///
/// This is a different ordering than [super::transactions_in_period]
/// produces. The statistics pipeline sorts by date only, and the two stages
/// are kept separate so that changing one cannot reorder the other.
pub fn sort_for_display(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Transactions that happened on a single calendar day.
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    /// The day the group covers.
    pub date: Date,
    /// The transactions on that day, in the order they were given.
    pub transactions: Vec<&'a Transaction>,
}

/// Fold an ordered transaction list into one group per calendar day.
///
/// Consecutive transactions sharing a date land in the same group, so the
/// input should already be ordered by [sort_for_display].
pub fn group_by_day<'a>(transactions: &'a [Transaction]) -> Vec<DayGroup<'a>> {
    let mut days: Vec<DayGroup<'a>> = Vec::new();

    for transaction in transactions {
        let day_group = match days.last_mut() {
            Some(current) if current.date == transaction.date => current,
            _ => {
                days.push(DayGroup {
                    date: transaction.date,
                    transactions: Vec::new(),
                });
                days.last_mut().expect("day group just added")
            }
        };

        day_group.transactions.push(transaction);
    }

    days
}
