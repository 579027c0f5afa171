//! Progress tracking over a key-value store.
//!
//! The record, the daily bucket history and the per-word counters are three
//! independent JSON blobs. Reads never fail: missing or malformed data is
//! treated as no data. Writes that fail are logged and dropped.

use crate::clock::{Clock, SystemClock};
use crate::config::TrackerSettings;
use crate::store::KeyValueStore;
use chrono::{NaiveDate, Utc};
use progress_core::week::{self, WeekWindow};
use progress_core::{
    study_day, DailyBucket, ProgressRecord, SessionSummary, StatisticsSummary, WordProgressEntry,
    WordProgressMap,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const PROGRESS_KEY: &str = "vocabulum-progress";
pub const WORD_PROGRESS_KEY: &str = "vocabulum-word-progress";
pub const WEEKLY_DATA_KEY: &str = "vocabulum-weekly-data";

/// Records study sessions and answers, and serves progress views.
pub struct ProgressTracker<S, C = SystemClock> {
    store: S,
    clock: C,
    settings: TrackerSettings,
}

impl<S: KeyValueStore> ProgressTracker<S, SystemClock> {
    /// Tracker on the wall clock with default settings.
    pub fn with_system_clock(store: S) -> Self {
        Self::new(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ProgressTracker<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self::with_settings(store, clock, TrackerSettings::default())
    }

    pub fn with_settings(store: S, clock: C, settings: TrackerSettings) -> Self {
        Self {
            store,
            clock,
            settings,
        }
    }

    /// Current progress, or defaults when nothing usable is stored.
    ///
    /// Does not persist the defaults.
    pub fn progress(&self) -> ProgressRecord {
        self.load(PROGRESS_KEY).unwrap_or_default()
    }

    /// Fold a finished study session into the progress record.
    pub fn record_session(&self, session: &SessionSummary) {
        let today = self.today();
        let mut record = self.progress();

        let change = record.apply_session(session, today);
        tracing::debug!(
            ?change,
            streak = record.current_streak,
            sessions = record.total_sessions,
            "applied study session"
        );

        self.update_weekly_buckets(&mut record, today, session.words_studied);
        self.save(PROGRESS_KEY, &record);
    }

    /// Add today's activity to the bucket history and refresh weekly totals.
    fn update_weekly_buckets(&self, record: &mut ProgressRecord, today: NaiveDate, words: u32) {
        let window = self.week_of(today);
        let mut history = self.history();

        week::record_activity(&mut history, today, words);
        record.apply_week_totals(window.totals(&history));

        if let Some(weeks) = self.settings.history_retention_weeks {
            let pruned = week::retain_weeks(&mut history, &window, weeks);
            if pruned > 0 {
                tracing::debug!(pruned, weeks, "pruned old daily buckets");
            }
        }

        self.save(WEEKLY_DATA_KEY, &history);
    }

    /// The seven buckets of the current week, week start first.
    pub fn weekly_progress(&self) -> Vec<DailyBucket> {
        self.current_week().project(&self.history())
    }

    /// Record one answer for a word.
    pub fn record_answer(&self, word_id: &str, is_correct: bool) {
        let now = self.clock.now().with_timezone(&Utc);
        let mut words = self.all_word_progress();

        words
            .entry(word_id.to_string())
            .or_insert_with(|| WordProgressEntry::new(now))
            .record(is_correct, now);

        self.save(WORD_PROGRESS_KEY, &words);
    }

    /// Counters for one word, if it has ever been answered.
    pub fn word_progress(&self, word_id: &str) -> Option<WordProgressEntry> {
        self.all_word_progress().remove(word_id)
    }

    pub fn all_word_progress(&self) -> WordProgressMap {
        self.load(WORD_PROGRESS_KEY).unwrap_or_default()
    }

    /// Figures for the statistics screen.
    pub fn statistics(&self) -> StatisticsSummary {
        StatisticsSummary::new(&self.progress(), &self.weekly_progress())
    }

    /// Clear all stored progress.
    pub fn reset(&self) {
        for key in [PROGRESS_KEY, WORD_PROGRESS_KEY, WEEKLY_DATA_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "failed to remove progress data");
            }
        }
        tracing::info!("progress reset");
    }

    fn today(&self) -> NaiveDate {
        study_day(self.clock.now().naive_local(), self.settings.daily_reset_hour)
    }

    fn week_of(&self, date: NaiveDate) -> WeekWindow {
        WeekWindow::containing(date, self.settings.week_start)
    }

    fn current_week(&self) -> WeekWindow {
        self.week_of(self.today())
    }

    fn history(&self) -> Vec<DailyBucket> {
        self.load(WEEKLY_DATA_KEY).unwrap_or_default()
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read progress data");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring malformed progress data");
                None
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize progress data");
                return;
            }
        };

        match self.store.set(key, &json) {
            Ok(()) => tracing::debug!(key, bytes = json.len(), "saved progress data"),
            Err(e) => tracing::warn!(key, error = %e, "failed to save progress data"),
        }
    }
}
