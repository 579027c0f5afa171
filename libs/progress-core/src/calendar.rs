//! Calendar helpers: study-day adjustment and weekday parsing.

use crate::error::{CoreError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Get the study day a local wall-clock time belongs to.
///
/// If the hour is before `daily_reset_hour`, the time still counts toward
/// the previous calendar day. This lets late-night sessions keep a streak
/// alive. With a reset hour of 0 this is the plain local date.
pub fn study_day(now: NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}

/// Validate a daily reset hour (0-23).
pub fn check_reset_hour(hour: u32) -> Result<u32> {
    if hour < 24 {
        Ok(hour)
    } else {
        Err(CoreError::InvalidResetHour(hour))
    }
}

/// Parse a weekday name such as `sun`, `Monday` or `TUE`.
pub fn parse_weekday(value: &str) -> Result<Weekday> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| CoreError::InvalidWeekday(value.to_string()))
}
