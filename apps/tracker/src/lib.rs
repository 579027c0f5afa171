//! Vocabulum progress tracker.
//!
//! Wires the pure progress arithmetic from `progress-core` to a key-value
//! store, a clock and environment configuration.

pub mod clock;
pub mod config;
pub mod state;
pub mod store;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, TrackerConfig, TrackerSettings};
pub use state::{AppState, SharedTracker};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use tracker::{ProgressTracker, PROGRESS_KEY, WEEKLY_DATA_KEY, WORD_PROGRESS_KEY};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Load configuration, start logging and open the application state.
pub fn bootstrap() -> anyhow::Result<AppState> {
    let config = TrackerConfig::from_env()?;
    init_tracing();

    tracing::info!(
        data_dir = %config.data_dir.display(),
        week_start = ?config.settings.week_start,
        daily_reset_hour = config.settings.daily_reset_hour,
        "starting progress tracker"
    );

    AppState::open(&config)
}
