//! Tracker configuration from the environment.

use chrono::Weekday;
use progress_core::calendar::check_reset_hour;
use progress_core::{parse_weekday, CoreError};
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_DIR_VAR: &str = "VOCABULUM_DATA_DIR";
pub const DAILY_RESET_HOUR_VAR: &str = "VOCABULUM_DAILY_RESET_HOUR";
pub const WEEK_START_VAR: &str = "VOCABULUM_WEEK_START";
pub const RETENTION_WEEKS_VAR: &str = "VOCABULUM_HISTORY_RETENTION_WEEKS";

const DATABASE_FILE: &str = "progress.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be at least 1")]
    ZeroRetention { var: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// How the tracker interprets days and weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerSettings {
    /// Hour (0-23) at which a new study day begins.
    pub daily_reset_hour: u32,
    /// First day of the weekly window.
    pub week_start: Weekday,
    /// Keep only this many trailing weeks of daily buckets. `None` keeps everything.
    pub history_retention_weeks: Option<u32>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            daily_reset_hour: 0,
            week_start: Weekday::Sun,
            history_retention_weeks: None,
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub settings: TrackerSettings,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            settings: TrackerSettings::default(),
        }
    }
}

impl TrackerConfig {
    /// Load from process environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = non_empty(lookup(DATA_DIR_VAR)) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(hour) = non_empty(lookup(DAILY_RESET_HOUR_VAR)) {
            config.settings.daily_reset_hour = check_reset_hour(parse_number(DAILY_RESET_HOUR_VAR, &hour)?)?;
        }

        if let Some(day) = non_empty(lookup(WEEK_START_VAR)) {
            config.settings.week_start = parse_weekday(&day)?;
        }

        if let Some(weeks) = non_empty(lookup(RETENTION_WEEKS_VAR)) {
            let weeks = parse_number(RETENTION_WEEKS_VAR, &weeks)?;
            if weeks == 0 {
                return Err(ConfigError::ZeroRetention {
                    var: RETENTION_WEEKS_VAR,
                });
            }
            config.settings.history_retention_weeks = Some(weeks);
        }

        Ok(config)
    }

    /// Location of the SQLite progress database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocabulum")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_number(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
