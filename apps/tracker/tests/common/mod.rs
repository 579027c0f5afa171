//! Common test utilities for tracker integration tests.
//!
//! Each test gets its own in-memory store and a manually driven clock, so
//! tests never share state and never depend on the real date.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate};
use vocabulum_tracker::{FixedClock, KeyValueStore, MemoryStore, ProgressTracker, TrackerSettings};

pub type TestTracker = ProgressTracker<Arc<MemoryStore>, Arc<FixedClock>>;

/// Isolated tracker with handles on its store and clock.
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
    pub tracker: TestTracker,
}

impl TestContext {
    /// Context starting on Wednesday 2026-10-21 at noon.
    pub fn new() -> Self {
        Self::starting_at(fixtures::local_noon(2026, 10, 21))
    }

    pub fn starting_at(now: DateTime<Local>) -> Self {
        Self::build(MemoryStore::new(), now, TrackerSettings::default())
    }

    pub fn with_settings(settings: TrackerSettings) -> Self {
        Self::build(MemoryStore::new(), fixtures::local_noon(2026, 10, 21), settings)
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::build(store, fixtures::local_noon(2026, 10, 21), TrackerSettings::default())
    }

    fn build(store: MemoryStore, now: DateTime<Local>, settings: TrackerSettings) -> Self {
        let store = Arc::new(store);
        let clock = Arc::new(FixedClock::new(now));
        let tracker = ProgressTracker::with_settings(store.clone(), clock.clone(), settings);
        Self {
            store,
            clock,
            tracker,
        }
    }

    /// Raw stored value for a key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("memory store read")
    }

    /// Overwrite a key with arbitrary text.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.store.set(key, value).expect("memory store write");
    }

    pub fn advance_days(&self, days: i64) {
        self.clock.advance_days(days);
    }

    pub fn today(&self) -> NaiveDate {
        use vocabulum_tracker::Clock;
        self.clock.now().date_naive()
    }
}
