//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("quota exceeded writing {key}: {needed} bytes over a {limit} byte limit")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
