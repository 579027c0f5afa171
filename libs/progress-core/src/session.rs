//! Applying a finished study session to the progress record.

use crate::streak::{advance_streak, StreakChange};
use crate::types::{ProgressRecord, SessionSummary};
use crate::week::WeekTotals;
use chrono::NaiveDate;

/// Percentage of correct answers in one session, 0 when nothing was answered.
pub fn session_accuracy(correct: u32, incorrect: u32) -> f64 {
    let total = correct as f64 + incorrect as f64;
    if total > 0.0 {
        correct as f64 / total * 100.0
    } else {
        0.0
    }
}

/// Fold one session accuracy into the running mean.
///
/// `sessions` is the session count including the new one. Every session
/// weighs the same regardless of how many words it covered.
pub fn running_accuracy(previous: f64, sessions: u32, session_accuracy: f64) -> f64 {
    if sessions <= 1 {
        return session_accuracy;
    }
    let n = sessions as f64;
    ((previous * (n - 1.0) + session_accuracy) / n).clamp(0.0, 100.0)
}

impl ProgressRecord {
    /// Apply counters, accuracy, study time and streak for a finished session.
    ///
    /// Weekly totals are applied separately with [`ProgressRecord::apply_week_totals`]
    /// once the bucket history has been updated.
    pub fn apply_session(&mut self, session: &SessionSummary, today: NaiveDate) -> StreakChange {
        self.words_studied = self.words_studied.saturating_add(session.words_studied);
        self.words_learned = self.words_learned.saturating_add(session.correct_answers);
        self.total_sessions = self.total_sessions.saturating_add(1);
        self.total_time = self.total_time.saturating_add(session.time_spent.as_secs());

        let accuracy = session_accuracy(session.correct_answers, session.incorrect_answers);
        self.accuracy = running_accuracy(self.accuracy, self.total_sessions, accuracy);

        advance_streak(self, today)
    }

    /// Copy the current week's totals into the derived fields.
    pub fn apply_week_totals(&mut self, totals: WeekTotals) {
        self.words_this_week = totals.words;
        self.sessions_this_week = totals.sessions;
        self.weekly_progress = totals.words;
    }
}
