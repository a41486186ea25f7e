//! Storage error types.

use thiserror::Error;

/// Failure while reading or writing a persisted snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend could not be reached at all.
    #[cfg(test)]
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid stored theme '{0}'")]
    InvalidTheme(String),
}
