//! The period filter that produces the transaction list statistics are
//! computed from.

use time::Date;

use super::Transaction;

/// The transactions on or after `start`, sorted by date descending.
///
/// With no `start` the full set is returned. The comparison is on calendar
/// dates only and there is no upper bound, so future-dated transactions are
/// always included.
///
/// Date is the only sort key at this stage. The sort is stable, so
/// transactions sharing a date keep the order they are stored in; the history
/// view applies its own creation-time tie-break separately.
pub fn transactions_in_period(
    transactions: &[Transaction],
    start: Option<Date>,
) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = match start {
        Some(start) => transactions
            .iter()
            .filter(|transaction| transaction.date >= start)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    };

    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    filtered
}
