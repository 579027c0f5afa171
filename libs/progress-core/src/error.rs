//! Error types for progress-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while interpreting progress settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("invalid daily reset hour {0}, expected 0-23")]
    InvalidResetHour(u32),
}
