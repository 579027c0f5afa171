//! Weekly bucketing of study activity.
//!
//! History is a flat list of [`DailyBucket`]s, one per active day. The
//! weekly view is a projection of that list onto a seven-day window.

use crate::types::DailyBucket;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Seven consecutive days starting on a fixed weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

/// Words and sessions summed over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekTotals {
    pub words: u32,
    pub sessions: u32,
}

impl WeekWindow {
    /// The week containing `date`, beginning on `week_start`.
    pub fn containing(date: NaiveDate, week_start: Weekday) -> Self {
        let offset = (7 + date.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
        Self {
            start: date - Duration::days(offset as i64),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// The seven dates of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..7).map(move |i| start + Duration::days(i))
    }

    /// Sum activity of the buckets inside the window.
    pub fn totals(&self, history: &[DailyBucket]) -> WeekTotals {
        history
            .iter()
            .filter(|bucket| self.contains(bucket.date))
            .fold(WeekTotals::default(), |acc, bucket| WeekTotals {
                words: acc.words.saturating_add(bucket.words),
                sessions: acc.sessions.saturating_add(bucket.sessions),
            })
    }

    /// Exactly seven buckets for the window, zero-filled where history has none.
    pub fn project(&self, history: &[DailyBucket]) -> Vec<DailyBucket> {
        self.days()
            .map(|date| {
                history
                    .iter()
                    .find(|bucket| bucket.date == date)
                    .cloned()
                    .unwrap_or_else(|| DailyBucket::empty(date))
            })
            .collect()
    }
}

/// Add one session of `words` to the bucket for `date`, creating it if needed.
pub fn record_activity(history: &mut Vec<DailyBucket>, date: NaiveDate, words: u32) {
    let index = match history.iter().position(|bucket| bucket.date == date) {
        Some(index) => index,
        None => {
            history.push(DailyBucket::empty(date));
            history.len() - 1
        }
    };
    let bucket = &mut history[index];
    bucket.words = bucket.words.saturating_add(words);
    bucket.sessions = bucket.sessions.saturating_add(1);
}

/// Drop buckets older than the trailing `weeks` weeks (the current one included).
///
/// Returns how many buckets were removed. A span reaching past the earliest
/// representable date keeps everything.
pub fn retain_weeks(history: &mut Vec<DailyBucket>, current: &WeekWindow, weeks: u32) -> usize {
    let keep = weeks.max(1) as i64;
    let cutoff = Duration::try_weeks(keep - 1).and_then(|span| current.start().checked_sub_signed(span));
    let Some(cutoff) = cutoff else {
        return 0;
    };
    let before = history.len();
    history.retain(|bucket| bucket.date >= cutoff);
    before - history.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn bucket(d: u32, words: u32, sessions: u32) -> DailyBucket {
        DailyBucket {
            words,
            sessions,
            ..DailyBucket::empty(day(d))
        }
    }

    #[test]
    fn window_starts_on_sunday() {
        // 2026-10-21 is a Wednesday.
        let window = WeekWindow::containing(day(21), Weekday::Sun);
        assert_eq!(window.start(), day(18));
        assert_eq!(window.end(), day(24));

        let window = WeekWindow::containing(day(18), Weekday::Sun);
        assert_eq!(window.start(), day(18));
    }

    #[test]
    fn window_with_monday_start() {
        let window = WeekWindow::containing(day(18), Weekday::Mon);
        assert_eq!(window.start(), day(12));
        assert!(window.contains(day(18)));
        assert!(!window.contains(day(19)));
    }

    #[test]
    fn projection_is_seven_days_in_order() {
        let window = WeekWindow::containing(day(21), Weekday::Sun);
        let week = window.project(&[bucket(20, 7, 1), bucket(11, 99, 4)]);

        let labels: Vec<&str> = week.iter().map(|b| b.day.as_str()).collect();
        assert_eq!(labels, ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
        assert_eq!(week[2], bucket(20, 7, 1));
        assert_eq!(week.iter().map(|b| b.words).sum::<u32>(), 7);
    }

    #[test]
    fn totals_ignore_other_weeks() {
        let window = WeekWindow::containing(day(21), Weekday::Sun);
        let history = [bucket(17, 50, 2), bucket(18, 5, 1), bucket(21, 10, 2), bucket(25, 8, 1)];
        assert_eq!(window.totals(&history), WeekTotals { words: 15, sessions: 3 });
    }

    #[test]
    fn record_activity_creates_then_increments() {
        let mut history = vec![bucket(17, 3, 1)];
        record_activity(&mut history, day(18), 5);
        record_activity(&mut history, day(18), 2);

        assert_eq!(history.len(), 2);
        assert_eq!(history[1], bucket(18, 7, 2));
        assert_eq!(history[0], bucket(17, 3, 1));
    }

    #[test]
    fn retention_keeps_trailing_weeks() {
        let window = WeekWindow::containing(day(21), Weekday::Sun);
        let mut history = vec![bucket(3, 1, 1), bucket(10, 1, 1), bucket(11, 1, 1), bucket(20, 1, 1)];

        let removed = retain_weeks(&mut history, &window, 2);
        assert_eq!(removed, 2);
        assert_eq!(history, vec![bucket(11, 1, 1), bucket(20, 1, 1)]);
    }

    #[test]
    fn huge_retention_keeps_everything() {
        let window = WeekWindow::containing(day(21), Weekday::Sun);
        let mut history = vec![bucket(3, 1, 1), bucket(20, 1, 1)];

        assert_eq!(retain_weeks(&mut history, &window, u32::MAX), 0);
        assert_eq!(history.len(), 2);
    }
}
