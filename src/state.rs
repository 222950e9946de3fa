//! Implements the struct that ties the stores, catalog, and aggregation
//! engine together for a presentation layer.

use std::sync::Arc;

use time::Date;

use crate::{
    Error,
    category::CategoryCatalog,
    dashboard::{Overview, project},
    period::Period,
    seed::generate_sample_data,
    stores::{PreferenceStore, Preferences, StorageBackend, TransactionLog},
    timezone,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The state of one user's session: their transaction set, the category
/// catalog, and the selected period.
///
/// All reads go through [AppState::overview], which recomputes the derived
/// aggregates from the current snapshot; mutations apply optimistically and
/// persist in the background.
pub struct AppState {
    log: TransactionLog,
    catalog: CategoryCatalog,
    preferences: Option<PreferenceStore>,
    selected_period: Period,
    local_timezone: String,
}

impl AppState {
    /// Create the session state on top of a storage backend selected by the
    /// caller.
    ///
    /// Loads the last-known-good transaction snapshot and the saved period
    /// preference. `local_timezone` is a canonical timezone name, e.g.
    /// "Europe/Moscow"; it decides what "today" means for period bounds and
    /// default transaction dates.
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        preferences: Option<PreferenceStore>,
        local_timezone: &str,
    ) -> Self {
        let log = TransactionLog::load(backend);
        let selected_period = preferences
            .as_ref()
            .map(|store| store.load().period)
            .unwrap_or_default();

        Self {
            log,
            catalog: CategoryCatalog::built_in(),
            preferences,
            selected_period,
            local_timezone: local_timezone.to_owned(),
        }
    }

    /// The category catalog for this session.
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// The period the dashboard is currently filtered by.
    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    /// Change the dashboard period and remember it for the next session.
    pub fn set_period(&mut self, period: Period) {
        self.selected_period = period;

        if let Some(store) = &self.preferences {
            store.save(&Preferences { period });
        }
    }

    /// The current date in the configured timezone.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the configured timezone name
    /// is not canonical.
    pub fn today(&self) -> Result<Date, Error> {
        timezone::today_in(&self.local_timezone)
    }

    /// Recompute the full dashboard view for the selected period.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the configured timezone name
    /// is not canonical.
    pub fn overview(&self) -> Result<Overview, Error> {
        Ok(project(
            self.log.transactions(),
            self.selected_period,
            self.today()?,
            &self.catalog,
        ))
    }

    /// Validate and record a new transaction.
    ///
    /// # Errors
    /// Returns the [NewTransaction] validation errors, or
    /// [Error::InvalidTimezoneError] if today's date cannot be resolved.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction, Error> {
        let today = self.today()?;
        self.log.add(new, today)
    }

    /// Delete a transaction by id. Unknown ids are a no-op.
    ///
    /// Returns whether a transaction was removed.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> bool {
        self.log.delete(id)
    }

    /// Fill the store with generated demo data.
    ///
    /// Returns the number of transactions added.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if today's date cannot be
    /// resolved.
    pub fn seed(&mut self) -> Result<usize, Error> {
        let sample = generate_sample_data(self.today()?);
        let count = sample.len();
        self.log.extend(sample);

        Ok(count)
    }

    /// Remove every transaction for this user.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Wait for outstanding persistence writes to finish.
    pub async fn flush(&mut self) {
        self.log.flush().await;
    }
}
