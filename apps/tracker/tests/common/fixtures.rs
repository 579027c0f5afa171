//! Test fixtures and factory functions for creating test data.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use progress_core::SessionSummary;
use serde_json::json;

/// Local noon on a date. Noon keeps day arithmetic clear of DST transitions.
pub fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("unambiguous local noon")
}

/// Local time at an arbitrary hour.
pub fn local_at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, 30, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Session summary with no recorded time.
pub fn session(words: u32, correct: u32, incorrect: u32) -> SessionSummary {
    SessionSummary::new(words, correct, incorrect)
}

/// Serialized bucket history as the tracker stores it.
pub fn history_json(buckets: &[(NaiveDate, u32, u32)]) -> String {
    let entries: Vec<_> = buckets
        .iter()
        .map(|(date, words, sessions)| {
            json!({
                "day": date.format("%a").to_string(),
                "words": words,
                "sessions": sessions,
                "date": date.format("%Y-%m-%d").to_string(),
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}
