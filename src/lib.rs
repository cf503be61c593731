//! Score aggregation for the 31-FLIP producer tournament.
//!
//! This library turns raw per-judge-per-round score rows into the nested JSON
//! structures the tournament dashboard renders: a producer leaderboard with
//! per-round breakdowns, judge statistics and scoring histories, per-event
//! round tables, and passthrough views over the Users / Teams / FUsers
//! reference tables.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use flipboard::prelude::*;
//!
//! // Open the tournament database read-only
//! let store = Store::open(Path::new("database.db"))?;
//!
//! // Build the leaderboard from a fresh row snapshot
//! let rows = store.score_rows()?;
//! let board = build_leaderboard(&rows, TotalFormula::Combined);
//! ```
//!
//! # Modules
//!
//! - [`aggregate`] - Pure aggregation over score-row snapshots (always available)
//! - [`store`] - Read-only SQLite row store (requires `store` feature)
//! - [`service`] - Fail-soft entry points consumed by the HTTP layer (requires `store` feature)
//! - [`server`] - HTTP API server built on axum (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `store` - Enable the SQLite row store and service layer (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

pub mod aggregate;
mod logging;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "store")]
pub mod service;
#[cfg(feature = "store")]
pub mod store;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Re-export aggregation types at crate root for convenience
pub use aggregate::{
    FlipData, Producer, ScoreRow, TotalFormula, build_event_summaries, build_judge_averages,
    build_judge_history, build_leaderboard, build_participant_history, build_participant_stats,
};

// Re-export store types at crate root for convenience
#[cfg(feature = "store")]
pub use store::{Store, StoreError};
