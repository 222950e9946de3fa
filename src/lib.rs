//! Fintrack keeps a personal ledger of income and expense transactions and
//! derives the numbers behind a finance dashboard: period-filtered
//! transaction lists, summary totals, a per-day time series, and
//! per-category breakdowns.
//!
//! The aggregation engine is pure and synchronous. Every call recomputes its
//! outputs from scratch over an in-memory snapshot of the transaction set;
//! there are no incremental indexes to keep consistent. Persistence runs
//! behind a [StorageBackend] capability object selected once at startup, and
//! writes are fire-and-forget: the in-memory state is authoritative as soon
//! as a mutation is accepted.

#![warn(missing_docs)]

mod category;
mod dashboard;
mod period;
mod seed;
mod state;
mod stores;
mod timezone;
mod transaction;

pub use category::{Category, CategoryCatalog, CategoryDisplay};
pub use dashboard::{
    BalancePoint, CategoryAggregate, CategoryBreakdown, DailyAggregate, Overview, PeriodStats,
    cumulative_balance, project,
};
pub use period::Period;
pub use seed::generate_sample_data;
pub use state::AppState;
pub use stores::{
    JsonFileBackend, MemoryBackend, PreferenceStore, Preferences, StorageBackend, TransactionLog,
};
pub use timezone::today_in;
pub use transaction::{
    DayGroup, NewTransaction, Transaction, TransactionId, TransactionKind, group_by_day,
    sort_for_display, transactions_in_period,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction was submitted with an amount of zero.
    ///
    /// The sign of a submitted amount is ignored (the magnitude is stored and
    /// the direction is carried by the transaction kind), so zero is the only
    /// amount that cannot be recorded.
    #[error("transaction amount must not be zero")]
    InvalidAmount,

    /// A transaction was submitted without a category.
    #[error("a category must be selected")]
    MissingCategory,

    /// A string did not name a transaction kind.
    #[error("unknown transaction kind \"{0}\", expected \"income\" or \"expense\"")]
    UnknownTransactionKind(String),

    /// A string did not name a period.
    #[error("unknown period \"{0}\", expected one of day, week, month, year, all")]
    UnknownPeriod(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The saved transaction data could not be read or parsed.
    #[error("could not load saved transactions: {0}")]
    LoadError(String),

    /// The transaction data could not be written to the backing store.
    #[error("could not persist transactions: {0}")]
    PersistError(String),
}
