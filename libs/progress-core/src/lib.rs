//! Core progress-tracking library for the vocabulary trainer.
//!
//! Provides:
//! - Progress record and session application (accuracy, streaks)
//! - Weekly bucketing of study activity
//! - Per-word difficulty counters and the study word filter
//! - Derived statistics and achievements
//!
//! Everything here is pure arithmetic over plain values; persistence lives
//! in the tracker application.

pub mod calendar;
pub mod error;
pub mod session;
pub mod stats;
pub mod streak;
pub mod types;
pub mod week;
pub mod word;

pub use calendar::{parse_weekday, study_day};
pub use error::{CoreError, Result};
pub use session::{running_accuracy, session_accuracy};
pub use stats::{Achievement, AchievementStatus, StatisticsSummary};
pub use streak::{advance_streak, StreakChange};
pub use types::{
    DailyBucket, ProgressRecord, SessionSummary, WordProgressEntry, WordProgressMap,
    DEFAULT_DAILY_GOAL,
};
pub use week::{WeekTotals, WeekWindow};
pub use word::{DifficultyLevel, MAX_DIFFICULTY};
