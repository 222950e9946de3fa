//! Persistence for per-user display preferences.
//!
//! The selected period is a session preference, not domain data. It is
//! saved under its own key, separate from the transaction array, and losing
//! it only costs the user a click.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::period::Period;

use super::backend::file_name_key;

/// Display preferences remembered between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// The period the dashboard was last filtered by.
    #[serde(default)]
    pub period: Period,
}

/// Reads and writes [Preferences] under `fintrack_prefs_<user>.json`.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// A preference store for one user under `data_dir`.
    pub fn new(data_dir: &Path, user_id: &str) -> Self {
        Self {
            path: data_dir.join(format!("fintrack_prefs_{}.json", file_name_key(user_id))),
        }
    }

    /// Load the saved preferences, falling back to the defaults when there
    /// are none or they cannot be read.
    pub fn load(&self) -> Preferences {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("could not read preferences, using defaults: {error}");
                }
                return Preferences::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(preferences) => preferences,
            Err(error) => {
                tracing::warn!("could not parse preferences, using defaults: {error}");
                Preferences::default()
            }
        }
    }

    /// Save the preferences, logging failures instead of surfacing them.
    pub fn save(&self, preferences: &Preferences) {
        let json = match serde_json::to_string(preferences) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!("could not serialize preferences: {error}");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, json) {
            tracing::error!("could not save preferences: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::period::Period;

    use super::{PreferenceStore, Preferences};

    #[test]
    fn missing_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path(), "guest");

        let preferences = store.load();

        assert_eq!(preferences.period, Period::Month);
    }

    #[test]
    fn saved_preferences_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path(), "guest");

        store.save(&Preferences {
            period: Period::Year,
        });

        assert_eq!(store.load().period, Period::Year);
    }

    #[test]
    fn corrupt_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path(), "guest");
        std::fs::write(
            dir.path().join("fintrack_prefs_guest.json"),
            "select * from preferences",
        )
        .unwrap();

        assert_eq!(store.load(), Preferences::default());
    }
}
