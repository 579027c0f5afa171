//! Statistics derived from the progress record for display.

use crate::types::{DailyBucket, ProgressRecord};
use serde::{Deserialize, Serialize};

/// Milestones unlocked by progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstSteps,
    WordMaster,
    StreakMaster,
    Perfectionist,
    DedicatedLearner,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Self::FirstSteps,
        Self::WordMaster,
        Self::StreakMaster,
        Self::Perfectionist,
        Self::DedicatedLearner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstSteps => "First Steps",
            Self::WordMaster => "Word Master",
            Self::StreakMaster => "Streak Master",
            Self::Perfectionist => "Perfectionist",
            Self::DedicatedLearner => "Dedicated Learner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FirstSteps => "Completed your first vocabulary session",
            Self::WordMaster => "Learned 100 words",
            Self::StreakMaster => "Maintained a 7-day streak",
            Self::Perfectionist => "Reached 95% accuracy",
            Self::DedicatedLearner => "Completed 10 study sessions",
        }
    }

    pub fn is_earned(&self, record: &ProgressRecord) -> bool {
        match self {
            Self::FirstSteps => record.total_sessions > 0,
            Self::WordMaster => record.words_learned >= 100,
            Self::StreakMaster => record.longest_streak >= 7,
            Self::Perfectionist => record.accuracy >= 95.0,
            Self::DedicatedLearner => record.total_sessions >= 10,
        }
    }
}

/// An achievement and whether it has been unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    pub earned: bool,
}

/// Figures shown on the statistics screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub words_learned: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_sessions: u32,
    pub total_hours: f64,
    /// Accuracy rounded to a whole percent.
    pub accuracy: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    /// Share of the weekly goal reached, capped at 100.
    pub goal_percent: f64,
    pub achievements: Vec<AchievementStatus>,
}

impl StatisticsSummary {
    /// Build the summary from the record and the current week's buckets.
    ///
    /// Weekly progress is summed from `week` rather than read from the record,
    /// whose weekly fields are only refreshed when a session completes.
    pub fn new(record: &ProgressRecord, week: &[DailyBucket]) -> Self {
        let weekly_goal = record.daily_goal.saturating_mul(7);
        let weekly_progress = week.iter().fold(0u32, |acc, b| acc.saturating_add(b.words));
        let goal_percent = if weekly_goal > 0 {
            (weekly_progress as f64 / weekly_goal as f64 * 100.0).min(100.0)
        } else {
            0.0
        };

        Self {
            words_learned: record.words_learned,
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            total_sessions: record.total_sessions,
            total_hours: record.total_time as f64 / 3600.0,
            accuracy: record.accuracy.clamp(0.0, 100.0).round() as u32,
            weekly_goal,
            weekly_progress,
            goal_percent,
            achievements: Achievement::ALL
                .iter()
                .map(|a| AchievementStatus {
                    achievement: *a,
                    earned: a.is_earned(record),
                })
                .collect(),
        }
    }

    pub fn earned(&self) -> impl Iterator<Item = Achievement> + '_ {
        self.achievements
            .iter()
            .filter(|status| status.earned)
            .map(|status| status.achievement)
    }
}
