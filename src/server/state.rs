//! Application state management.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::TotalFormula;
use crate::store::{Store, StoreError};

use super::config::Config;
use super::error::ApiError;

/// Shared application state.
///
/// Holds the database location rather than a live connection: every request
/// opens its own read-only connection and drops it on completion, so
/// concurrent requests never contend on shared mutable aggregation state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    db_path: PathBuf,
    formula: TotalFormula,
    started: Instant,
}

impl AppState {
    /// Create application state from configuration, probing the database
    /// once so a misconfigured path fails at startup rather than per request.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let db_path = config.database.path.clone();
        let store = Store::open(&db_path).map_err(|e| StateError::OpenDatabase {
            path: db_path.display().to_string(),
            source: e,
        })?;
        store.ping().map_err(|e| StateError::OpenDatabase {
            path: db_path.display().to_string(),
            source: e,
        })?;

        Ok(Self {
            inner: Arc::new(Inner {
                db_path,
                formula: config.aggregation.formula,
                started: Instant::now(),
            }),
        })
    }

    /// The configured leaderboard total formula.
    pub fn formula(&self) -> TotalFormula {
        self.inner.formula
    }

    /// Seconds since the server started.
    pub fn uptime_secs(&self) -> u64 {
        self.inner.started.elapsed().as_secs()
    }

    /// Run a service call on a blocking thread with a fresh read-only
    /// connection.
    ///
    /// A store that fails to open degrades to the service default, matching
    /// the fail-soft contract of the service layer; only a panicked or
    /// cancelled worker surfaces as the defensive 500.
    pub async fn with_store<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Default + Send + 'static,
        F: FnOnce(&Store) -> T + Send + 'static,
    {
        let db_path = self.inner.db_path.clone();
        tokio::task::spawn_blocking(move || match Store::open(&db_path) {
            Ok(store) => f(&store),
            Err(err) => {
                tracing::error!(error = %err, "failed to open score database");
                T::default()
            }
        })
        .await
        .map_err(|_| ApiError::internal())
    }
}

/// Errors that can occur when setting up application state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to open the database.
    OpenDatabase { path: String, source: StoreError },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::OpenDatabase { path, source } => {
                write!(f, "Failed to open database at '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StateError {}
