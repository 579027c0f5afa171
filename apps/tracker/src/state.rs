//! Application state.

use crate::clock::SystemClock;
use crate::config::TrackerConfig;
use crate::store::SqliteStore;
use crate::tracker::ProgressTracker;
use anyhow::Context;
use std::sync::{Arc, Mutex};

/// Tracker shared between UI handlers; the mutex serializes read-modify-write cycles.
pub type SharedTracker = Arc<Mutex<ProgressTracker<SqliteStore>>>;

/// Global application state.
#[derive(Clone)]
pub struct AppState {
    pub tracker: SharedTracker,
}

impl AppState {
    pub fn new(tracker: ProgressTracker<SqliteStore>) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Open the progress database described by `config`, creating its directory.
    pub fn open(config: &TrackerConfig) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("failed to create data directory {:?}", config.data_dir))?;

        let db_path = config.database_path();
        let store = SqliteStore::open(&db_path)
            .with_context(|| format!("failed to open progress database {:?}", db_path))?;
        tracing::info!(path = %db_path.display(), "opened progress database");

        Ok(Self::new(ProgressTracker::with_settings(
            store,
            SystemClock,
            config.settings,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_core::SessionSummary;

    #[test]
    fn open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig {
            data_dir: dir.path().join("nested"),
            ..Default::default()
        };

        let state = AppState::open(&config).unwrap();
        state
            .tracker
            .lock()
            .unwrap()
            .record_session(&SessionSummary::new(4, 4, 0));

        assert!(config.database_path().exists());
        let reopened = AppState::open(&config).unwrap();
        assert_eq!(reopened.tracker.lock().unwrap().progress().words_studied, 4);
    }
}
