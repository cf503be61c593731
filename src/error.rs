//! Unified error type for the flipboard library.
//!
//! The aggregation layer itself is infallible (malformed rows are skipped,
//! never fatal), so errors only arise at the storage boundary. This module
//! provides a single [`Error`] type wrapping those, for callers that want
//! one error type throughout their application.

use thiserror::Error;

#[cfg(feature = "store")]
use crate::store::StoreError;

/// Unified error type for all flipboard operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the SQLite row store.
    #[cfg(feature = "store")]
    #[error(transparent)]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
