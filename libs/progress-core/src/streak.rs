//! Consecutive study-day streaks.

use crate::types::ProgressRecord;
use chrono::NaiveDate;

/// What a session did to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First session ever.
    Started,
    /// Studied the day after the previous session.
    Extended,
    /// A gap of more than one day; the streak restarts at 1.
    Reset,
    /// Today already counted.
    AlreadyCounted,
    /// The previous study date lies in the future (clock moved backwards).
    Unchanged,
}

/// Advance the streak for a session on `today`.
///
/// At most one update happens per study day: once `last_study_date` is today
/// further sessions leave the streak alone.
pub fn advance_streak(record: &mut ProgressRecord, today: NaiveDate) -> StreakChange {
    if record.last_study_date == Some(today) {
        return StreakChange::AlreadyCounted;
    }

    let change = match record.last_study_date {
        Some(last) => match (today - last).num_days() {
            1 => {
                record.current_streak = record.current_streak.saturating_add(1);
                StreakChange::Extended
            }
            gap if gap > 1 => {
                record.current_streak = 1;
                StreakChange::Reset
            }
            _ => StreakChange::Unchanged,
        },
        None => {
            record.current_streak = 1;
            StreakChange::Started
        }
    };

    record.last_study_date = Some(today);
    record.longest_streak = record.longest_streak.max(record.current_streak);
    change
}
