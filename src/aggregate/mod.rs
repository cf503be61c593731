//! Pure aggregation over score-row snapshots.
//!
//! Everything in this module is a stateless transform: it takes a snapshot of
//! [`ScoreRow`]s already fetched from storage and reshapes it into the
//! structures the dashboard renders. Nothing here touches SQL, so the whole
//! pipeline is testable without a database, and concurrent requests can
//! aggregate in parallel over their own snapshots.
//!
//! Aggregators never fail: rows without a resolvable participant identity are
//! skipped during grouping, and empty input produces empty output.

mod events;
mod history;
mod judges;
mod leaderboard;
mod participants;
mod reference;
mod score;

pub use events::{EventParticipant, EventSummary, build_event_summaries};
pub use history::{HistoryEntry, build_participant_history};
pub use judges::{JudgeHistoryEntry, JudgeStat, build_judge_averages, build_judge_history};
pub use leaderboard::{EventBoard, FlipData, Producer, RoundScore, build_leaderboard};
pub use participants::{ParticipantStat, build_participant_stats};
pub use reference::{
    FUserEntry, TeamEntry, UserEntry, build_fusers_data, build_teams_data, build_users_data,
};
pub use score::{TotalFormula, game_type_score, judged_row_score, row_total, team_row_score};

use serde::{Deserialize, Serialize};

/// One judge's scoring of one participant in one round of one event.
///
/// Any score column may be null; nulls contribute 0 to sums and are excluded
/// from divisor counts where a score convention says so. Rows are immutable
/// inputs for a given request; everything derived from them is recomputed
/// fresh on every aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub event_id: i64,
    pub round: i64,
    /// Stable participant identity. Rows without one are skipped by the
    /// aggregators (names may collide or change, ids do not).
    pub participant_id: Option<i64>,
    pub participant_name: String,
    pub participant_team: Option<String>,
    /// The judge who wrote this row (`user_name` in storage).
    pub judge_name: String,
    pub k1: Option<f64>,
    pub k2: Option<f64>,
    pub k3: Option<f64>,
    pub k4: Option<f64>,
    /// Individual bonus.
    pub l: Option<f64>,
    pub t1: Option<f64>,
    pub t2: Option<f64>,
    pub t3: Option<f64>,
    pub t4: Option<f64>,
    pub t5: Option<f64>,
    pub t6: Option<f64>,
    pub t7: Option<f64>,
    /// Team bonus.
    pub tl: Option<f64>,
    pub game_type: Option<i64>,
    /// Event date as stored, `DD.MM.YYYY`.
    pub date: Option<String>,
    pub time: Option<String>,
}

/// One row of the Users reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_team_name: Option<String>,
    pub user_first_place: Option<i64>,
    pub user_second_place: Option<i64>,
    pub user_third_place: Option<i64>,
    pub user_team_wins: Option<i64>,
    pub user_team_games: Option<i64>,
    pub user_solo_wins: Option<i64>,
    pub user_solo_games: Option<i64>,
    pub l: Option<f64>,
    pub tl: Option<f64>,
    pub kall: Option<f64>,
    pub tall: Option<f64>,
}

/// One row of the Teams reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    pub team_name: String,
    pub team_wins: Option<i64>,
    pub team_games: Option<i64>,
    pub tall: Option<f64>,
}

/// One row of the FUsers reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FUserRow {
    pub user_name: String,
    pub user_team_name: Option<String>,
    pub l: Option<f64>,
    pub tl: Option<f64>,
}
