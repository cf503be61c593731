//! Error types for the row store.

use thiserror::Error;

/// Errors that can occur while reading the tournament database.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database not found at {0}")]
    NotFound(String),
}
