//! Defines the core transaction model and the builder used to record new
//! entries.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::Error;

/// Opaque identifier for a transaction. Generated at creation, never reused.
pub type TransactionId = Uuid;

/// Whether a transaction records money being earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money flowing in.
    Income,
    /// Money flowing out.
    Expense,
}

impl TransactionKind {
    /// The value used for this kind in queries and saved data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(Error::UnknownTransactionKind(other.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// Transactions are immutable once created: an edit replaces the record
/// wholesale rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned, in whole currency units.
    ///
    /// Always non-negative; the direction is carried by `kind`.
    pub amount: i64,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
    /// The ID of the category the transaction belongs to.
    ///
    /// Deliberately not validated against the catalog. An id with no catalog
    /// entry resolves to a placeholder category at aggregation time.
    pub category_id: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
    /// When the record was created.
    ///
    /// Only used as a tie-break when ordering transactions for display and
    /// when generating demo data.
    pub created_at: OffsetDateTime,
}

/// The user-supplied fields of a transaction, validated before it is stored.
///
/// The generated fields (`id`, `created_at`, and the default `date`) are
/// filled in by the store when the record is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The magnitude of the transaction. The sign is ignored; the absolute
    /// value is stored.
    pub amount: i64,
    /// Whether money was earned or spent.
    pub kind: TransactionKind,
    /// The ID of the category the transaction belongs to.
    pub category_id: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened. Defaults to today when not set.
    pub date: Option<Date>,
}

impl NewTransaction {
    /// Start a new transaction record.
    pub fn new(
        amount: i64,
        kind: TransactionKind,
        category_id: &str,
        description: &str,
    ) -> Self {
        Self {
            amount,
            kind,
            category_id: category_id.to_owned(),
            description: description.to_owned(),
            date: None,
        }
    }

    /// Set the date the transaction happened on.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Validate the input and produce the stored record.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] for a zero amount, or
    /// [Error::MissingCategory] for an empty category id. No record is
    /// created in either case.
    pub(crate) fn finalize(
        self,
        today: Date,
        created_at: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        if self.amount == 0 {
            return Err(Error::InvalidAmount);
        }

        if self.category_id.trim().is_empty() {
            return Err(Error::MissingCategory);
        }

        Ok(Transaction {
            id: Uuid::new_v4(),
            amount: self.amount.abs(),
            kind: self.kind,
            category_id: self.category_id,
            description: self.description,
            date: self.date.unwrap_or(today),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, macros::date};

    use crate::{Error, transaction::TransactionKind};

    use super::NewTransaction;

    #[test]
    fn finalize_rejects_zero_amount() {
        let result = NewTransaction::new(0, TransactionKind::Expense, "food", "Groceries")
            .finalize(date!(2024 - 01 - 15), OffsetDateTime::UNIX_EPOCH);

        assert_eq!(result, Err(Error::InvalidAmount));
    }

    #[test]
    fn finalize_rejects_missing_category() {
        let result = NewTransaction::new(500, TransactionKind::Expense, "  ", "Groceries")
            .finalize(date!(2024 - 01 - 15), OffsetDateTime::UNIX_EPOCH);

        assert_eq!(result, Err(Error::MissingCategory));
    }

    #[test]
    fn finalize_stores_magnitude_of_negative_amount() {
        let transaction = NewTransaction::new(-750, TransactionKind::Expense, "food", "Groceries")
            .finalize(date!(2024 - 01 - 15), OffsetDateTime::UNIX_EPOCH)
            .expect("transaction should be accepted");

        assert_eq!(transaction.amount, 750);
        assert_eq!(transaction.kind, TransactionKind::Expense);
    }

    #[test]
    fn finalize_defaults_date_to_today() {
        let today = date!(2024 - 01 - 15);

        let transaction = NewTransaction::new(500, TransactionKind::Income, "salary", "")
            .finalize(today, OffsetDateTime::UNIX_EPOCH)
            .expect("transaction should be accepted");

        assert_eq!(transaction.date, today);
    }

    #[test]
    fn finalize_keeps_explicit_date() {
        let transaction = NewTransaction::new(500, TransactionKind::Income, "salary", "")
            .date(date!(2023 - 12 - 31))
            .finalize(date!(2024 - 01 - 15), OffsetDateTime::UNIX_EPOCH)
            .expect("transaction should be accepted");

        assert_eq!(transaction.date, date!(2023 - 12 - 31));
    }

    #[test]
    fn dates_serialize_as_calendar_strings() {
        let transaction = NewTransaction::new(500, TransactionKind::Expense, "food", "Groceries")
            .date(date!(2024 - 01 - 02))
            .finalize(date!(2024 - 01 - 15), OffsetDateTime::UNIX_EPOCH)
            .expect("transaction should be accepted");

        let json = serde_json::to_string(&transaction).expect("transaction should serialize");

        assert!(json.contains("\"date\":\"2024-01-02\""), "got {json}");
        assert!(json.contains("\"kind\":\"expense\""), "got {json}");

        let round_tripped: super::Transaction =
            serde_json::from_str(&json).expect("transaction should deserialize");
        assert_eq!(round_tripped, transaction);
    }
}
