//! The transaction store: the in-memory canonical transaction set with
//! fire-and-forget persistence.

use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tokio::task::JoinHandle;

use crate::{
    Error,
    stores::backend::StorageBackend,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Owns the canonical transaction set for one user.
///
/// Mutations apply to the in-memory set first and are persisted in a
/// background task; the in-memory state is authoritative as soon as a
/// mutation is accepted, and a failed write is logged rather than surfaced.
/// There is exactly one logical writer (the active session), so no locking
/// is involved.
pub struct TransactionLog {
    backend: Arc<dyn StorageBackend>,
    transactions: Vec<Transaction>,
    pending_writes: Vec<JoinHandle<()>>,
}

impl TransactionLog {
    /// Load the last-known-good snapshot from `backend`.
    ///
    /// A backend that fails to load is logged and treated as empty rather
    /// than aborting startup.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let transactions = match backend.load() {
            Ok(transactions) => transactions,
            Err(error) => {
                tracing::warn!("could not load saved transactions, starting empty: {error}");
                Vec::new()
            }
        };

        Self {
            backend,
            transactions,
            pending_writes: Vec::new(),
        }
    }

    /// The current transaction set, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validate and record a new transaction, defaulting its date to
    /// `today`.
    ///
    /// # Errors
    /// Returns the [NewTransaction] validation errors; nothing is stored in
    /// that case.
    pub fn add(&mut self, new: NewTransaction, today: Date) -> Result<Transaction, Error> {
        let transaction = new.finalize(today, OffsetDateTime::now_utc())?;

        self.transactions.insert(0, transaction.clone());
        self.persist_in_background();

        Ok(transaction)
    }

    /// Delete the transaction with `id`, if it exists.
    ///
    /// Deleting an unknown id is a no-op, not an error. Returns whether a
    /// transaction was removed.
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| &transaction.id != id);

        let removed = self.transactions.len() != count_before;
        if removed {
            self.persist_in_background();
        }

        removed
    }

    /// Append already-built transactions, e.g. generated demo data.
    pub fn extend(&mut self, transactions: Vec<Transaction>) {
        if transactions.is_empty() {
            return;
        }

        self.transactions.extend(transactions);
        self.persist_in_background();
    }

    /// Remove every transaction.
    pub fn clear(&mut self) {
        self.transactions.clear();

        let backend = Arc::clone(&self.backend);
        self.spawn_write("clearing the transaction store", move || backend.clear());
    }

    /// Wait for outstanding persistence writes to finish.
    ///
    /// Short-lived processes should call this before exiting so the tail of
    /// their mutations reaches the backing store.
    pub async fn flush(&mut self) {
        for handle in self.pending_writes.drain(..) {
            let _ = handle.await;
        }
    }

    fn persist_in_background(&mut self) {
        let backend = Arc::clone(&self.backend);
        let snapshot = self.transactions.clone();
        self.spawn_write("persisting transactions", move || {
            backend.persist(&snapshot)
        });
    }

    fn spawn_write<F>(&mut self, description: &'static str, write: F)
    where
        F: FnOnce() -> Result<(), Error> + Send + 'static,
    {
        self.pending_writes.push(tokio::spawn(async move {
            match tokio::task::spawn_blocking(write).await {
                Ok(Ok(())) => {}
                Ok(Err(error)) => tracing::error!("{description} failed: {error}"),
                Err(error) => tracing::error!("{description} panicked: {error}"),
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::macros::date;

    use crate::{
        Error,
        stores::{JsonFileBackend, MemoryBackend},
        transaction::{NewTransaction, TransactionKind},
    };

    use super::TransactionLog;

    fn new_expense(amount: i64) -> NewTransaction {
        NewTransaction::new(amount, TransactionKind::Expense, "food", "Groceries")
    }

    #[tokio::test]
    async fn added_transactions_are_visible_immediately() {
        let mut log = TransactionLog::load(Arc::new(MemoryBackend));

        log.add(new_expense(500), date!(2024 - 01 - 15)).unwrap();

        assert_eq!(log.transactions().len(), 1);
        assert_eq!(log.transactions()[0].amount, 500);
    }

    #[tokio::test]
    async fn newest_transaction_is_stored_first() {
        let mut log = TransactionLog::load(Arc::new(MemoryBackend));

        let first = log.add(new_expense(100), date!(2024 - 01 - 15)).unwrap();
        let second = log.add(new_expense(200), date!(2024 - 01 - 15)).unwrap();

        assert_eq!(log.transactions()[0].id, second.id);
        assert_eq!(log.transactions()[1].id, first.id);
    }

    #[tokio::test]
    async fn invalid_input_stores_nothing() {
        let mut log = TransactionLog::load(Arc::new(MemoryBackend));

        let result = log.add(new_expense(0), date!(2024 - 01 - 15));

        assert_eq!(result, Err(Error::InvalidAmount));
        assert!(log.transactions().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_transaction() {
        let mut log = TransactionLog::load(Arc::new(MemoryBackend));
        let keep = log.add(new_expense(100), date!(2024 - 01 - 15)).unwrap();
        let remove = log.add(new_expense(200), date!(2024 - 01 - 15)).unwrap();

        assert!(log.delete(&remove.id));

        assert_eq!(log.transactions().len(), 1);
        assert_eq!(log.transactions()[0].id, keep.id);
    }

    #[tokio::test]
    async fn deleting_an_unknown_id_is_a_no_op() {
        let mut log = TransactionLog::load(Arc::new(MemoryBackend));
        let transaction = log.add(new_expense(100), date!(2024 - 01 - 15)).unwrap();

        assert!(log.delete(&transaction.id));
        assert!(!log.delete(&transaction.id));

        assert!(log.transactions().is_empty());
    }

    #[tokio::test]
    async fn mutations_reach_the_backend_after_flush() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(JsonFileBackend::new(dir.path(), "guest"));

        let mut log = TransactionLog::load(backend.clone());
        log.add(new_expense(500), date!(2024 - 01 - 15)).unwrap();
        log.flush().await;

        let reloaded = TransactionLog::load(backend);
        assert_eq!(reloaded.transactions().len(), 1);
        assert_eq!(reloaded.transactions()[0].amount, 500);
    }

    #[tokio::test]
    async fn clear_empties_the_store_and_the_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(JsonFileBackend::new(dir.path(), "guest"));

        let mut log = TransactionLog::load(backend.clone());
        log.add(new_expense(500), date!(2024 - 01 - 15)).unwrap();
        log.clear();
        log.flush().await;

        assert!(log.transactions().is_empty());
        let reloaded = TransactionLog::load(backend);
        assert!(reloaded.transactions().is_empty());
    }

    #[tokio::test]
    async fn a_corrupt_store_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path(), "guest");
        std::fs::write(backend.path(), "{ not json").unwrap();

        let log = TransactionLog::load(Arc::new(backend));

        assert!(log.transactions().is_empty());
    }
}
