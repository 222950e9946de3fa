//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` builder for recording them
//! - The period filter that produces the list statistics are computed from
//! - Display ordering and day grouping for the history view

mod core;
mod grouping;
mod query;

#[cfg(test)]
pub(crate) mod test_utils;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionKind};
pub use grouping::{DayGroup, group_by_day, sort_for_display};
pub use query::transactions_in_period;
