//! Per-word answer counters and the study word filter.

use crate::types::WordProgressEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of [`WordProgressEntry::difficulty`].
pub const MAX_DIFFICULTY: u8 = 5;

impl WordProgressEntry {
    /// Fresh entry with zero counters.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            correct_count: 0,
            incorrect_count: 0,
            last_reviewed: now,
            difficulty: 0,
        }
    }

    /// Record one answer: correct nudges difficulty down, incorrect nudges it up.
    pub fn record(&mut self, is_correct: bool, now: DateTime<Utc>) {
        let difficulty = self.difficulty.min(MAX_DIFFICULTY);
        if is_correct {
            self.correct_count = self.correct_count.saturating_add(1);
            self.difficulty = difficulty.saturating_sub(1);
        } else {
            self.incorrect_count = self.incorrect_count.saturating_add(1);
            self.difficulty = (difficulty + 1).min(MAX_DIFFICULTY);
        }
        self.last_reviewed = now;
    }

    pub fn total_answers(&self) -> u32 {
        self.correct_count.saturating_add(self.incorrect_count)
    }
}

/// Which words a study session draws from.
///
/// Selection works on raw answer counts; `difficulty` is not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Words never answered correctly.
    New,
    /// Every word.
    Mixed,
    /// Words missed more often than hit.
    Difficult,
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::Mixed
    }
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Mixed => "mixed",
            Self::Difficult => "difficult",
        }
    }

    /// Whether a word with these counts belongs in the session.
    pub fn matches(&self, correct_count: u32, incorrect_count: u32) -> bool {
        match self {
            Self::New => correct_count == 0,
            Self::Mixed => true,
            Self::Difficult => incorrect_count > correct_count,
        }
    }

    /// Filter `items` by the counts `counts` extracts from each.
    pub fn select<'a, T, F>(&self, items: &'a [T], counts: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> (u32, u32),
    {
        items
            .iter()
            .filter(|item| {
                let (correct, incorrect) = counts(item);
                self.matches(correct, incorrect)
            })
            .collect()
    }
}
