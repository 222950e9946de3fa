//! Helpers for constructing transactions in tests.

use time::{Date, OffsetDateTime};
use uuid::Uuid;

use super::{Transaction, TransactionKind};

/// A transaction with every field the caller does not care about fixed.
pub(crate) fn transaction(
    amount: i64,
    kind: TransactionKind,
    category_id: &str,
    date: Date,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        amount,
        kind,
        category_id: category_id.to_owned(),
        description: String::new(),
        date,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

/// An expense on the given date, for tests that only care about dates.
pub(crate) fn transaction_on(date: Date, amount: i64) -> Transaction {
    transaction(amount, TransactionKind::Expense, "food", date)
}
