//! Storage backends the transaction store persists through.
//!
//! The backend is chosen once at startup and injected into the store, so
//! whether data lands in a file or stays in memory is a property of the
//! process, not a module-level flag flipped at runtime.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, transaction::Transaction};

/// Persists snapshots of a user's transaction set.
///
/// Implementations are whole-set: every write replaces the previous
/// snapshot. The store treats its in-memory state as authoritative, so a
/// failed write is logged by the caller and never retried.
pub trait StorageBackend: Send + Sync {
    /// Load the last persisted snapshot. An empty store is not an error.
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the persisted snapshot.
    fn persist(&self, transactions: &[Transaction]) -> Result<(), Error>;

    /// Remove the persisted snapshot entirely.
    fn clear(&self) -> Result<(), Error>;
}

/// Stores the transaction set as one schema-less JSON array in a file per
/// user.
///
/// There is no version field and no migration logic; the array of
/// transaction records is the whole format.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// A backend writing to `fintrack_tx_<user>.json` under `data_dir`.
    ///
    /// Characters that could not appear in a file name are replaced in the
    /// user id.
    pub fn new(data_dir: &Path, user_id: &str) -> Self {
        Self {
            path: data_dir.join(format!("fintrack_tx_{}.json", file_name_key(user_id))),
        }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(Error::LoadError(error.to_string())),
        };

        serde_json::from_str(&contents).map_err(|error| Error::LoadError(error.to_string()))
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let json = serde_json::to_string(transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        fs::write(&self.path, json).map_err(|error| Error::PersistError(error.to_string()))
    }

    fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Error::PersistError(error.to_string())),
        }
    }
}

/// A backend that persists nothing, for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend;

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(Vec::new())
    }

    fn persist(&self, _transactions: &[Transaction]) -> Result<(), Error> {
        Ok(())
    }

    fn clear(&self) -> Result<(), Error> {
        Ok(())
    }
}

/// Make a user id safe to embed in a file name.
pub(crate) fn file_name_key(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
