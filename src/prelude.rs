//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use flipboard::prelude::*;
//!
//! let store = Store::open(Path::new("database.db"))?;
//! let rows = store.score_rows()?;
//! let board = build_leaderboard(&rows, TotalFormula::Combined);
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Aggregation types and builders
pub use crate::aggregate::{
    EventBoard, EventParticipant, EventSummary, FUserEntry, FUserRow, FlipData, HistoryEntry,
    JudgeHistoryEntry, JudgeStat, ParticipantStat, Producer, RoundScore, ScoreRow, TeamEntry,
    TeamRow, TotalFormula, UserEntry, UserRow, build_event_summaries, build_fusers_data,
    build_judge_averages, build_judge_history, build_leaderboard, build_participant_history,
    build_participant_stats, build_teams_data, build_users_data,
};

// Row store (requires "store" feature)
#[cfg(feature = "store")]
pub use crate::store::{Store, StoreError};
