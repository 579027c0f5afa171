//! Core types for progress tracking.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Daily word target for a fresh installation.
pub const DEFAULT_DAILY_GOAL: u32 = 20;

/// Aggregate learning progress, one per installation.
///
/// Every field falls back to its default when missing from persisted data,
/// so records written by older versions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub words_learned: u32,
    pub words_studied: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(with = "empty_date")]
    pub last_study_date: Option<NaiveDate>,
    pub total_sessions: u32,
    /// Accumulated study time in seconds.
    pub total_time: u64,
    /// Mean of per-session accuracies, 0-100.
    pub accuracy: f64,
    pub daily_goal: u32,
    pub weekly_progress: u32,
    pub sessions_this_week: u32,
    pub words_this_week: u32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            words_learned: 0,
            words_studied: 0,
            current_streak: 0,
            longest_streak: 0,
            last_study_date: None,
            total_sessions: 0,
            total_time: 0,
            accuracy: 0.0,
            daily_goal: DEFAULT_DAILY_GOAL,
            weekly_progress: 0,
            sessions_this_week: 0,
            words_this_week: 0,
        }
    }
}

/// Study activity for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// Short weekday label for display (`Sun`, `Mon`, ...).
    pub day: String,
    pub words: u32,
    pub sessions: u32,
    pub date: NaiveDate,
}

impl DailyBucket {
    /// Empty bucket for a date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            day: date.format("%a").to_string(),
            words: 0,
            sessions: 0,
            date,
        }
    }
}

/// Answer counters for one vocabulary word.
///
/// Missing fields read as zero (or the epoch for `last_reviewed`) so one
/// damaged entry does not void the whole map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordProgressEntry {
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub last_reviewed: DateTime<Utc>,
    /// 0 (easy) to 5 (recently missed a lot).
    pub difficulty: u8,
}

/// Word id to counters, as persisted.
pub type WordProgressMap = BTreeMap<String, WordProgressEntry>;

/// Summary of one finished study session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub words_studied: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    /// Elapsed time spent in the session.
    pub time_spent: Duration,
}

impl SessionSummary {
    pub fn new(words_studied: u32, correct_answers: u32, incorrect_answers: u32) -> Self {
        Self {
            words_studied,
            correct_answers,
            incorrect_answers,
            time_spent: Duration::ZERO,
        }
    }

    pub fn with_time_spent(mut self, time_spent: Duration) -> Self {
        self.time_spent = time_spent;
        self
    }
}

/// `last_study_date` is stored as `""` until the first session.
mod empty_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_record() {
        let record = ProgressRecord::default();
        assert_eq!(record.daily_goal, 20);
        assert_eq!(record.last_study_date, None);
        assert_eq!(record.accuracy, 0.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"wordsLearned": 12, "currentStreak": 3, "longestStreak": 4}"#).unwrap();
        assert_eq!(
            record,
            ProgressRecord {
                words_learned: 12,
                current_streak: 3,
                longest_streak: 4,
                ..ProgressRecord::default()
            }
        );
    }

    #[test]
    fn empty_study_date_round_trips_as_empty_string() {
        let json = serde_json::to_value(ProgressRecord::default()).unwrap();
        assert_eq!(json["lastStudyDate"], "");

        let record: ProgressRecord = serde_json::from_str(r#"{"lastStudyDate": ""}"#).unwrap();
        assert_eq!(record.last_study_date, None);

        let record: ProgressRecord = serde_json::from_str(r#"{"lastStudyDate": null}"#).unwrap();
        assert_eq!(record.last_study_date, None);
    }

    #[test]
    fn partial_word_entry_fills_missing_fields() {
        let entry: WordProgressEntry = serde_json::from_str(r#"{"correctCount": 2}"#).unwrap();
        assert_eq!(
            entry,
            WordProgressEntry {
                correct_count: 2,
                ..WordProgressEntry::default()
            }
        );
    }

    #[test]
    fn study_date_uses_iso_format() {
        let record = ProgressRecord {
            last_study_date: NaiveDate::from_ymd_opt(2026, 10, 18),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["lastStudyDate"], "2026-10-18");
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<ProgressRecord>(r#"{"wordsLearned": "many"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_bucket_label() {
        let bucket = DailyBucket::empty(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(bucket.day, "Sun");
        assert_eq!(bucket.words, 0);
        assert_eq!(bucket.sessions, 0);
    }
}
