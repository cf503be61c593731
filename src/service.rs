//! Fail-soft service entry points for the HTTP layer.
//!
//! Each function mirrors one API endpoint: it runs the storage queries,
//! feeds the rows through the pure aggregators, and maps any storage failure
//! to an empty result after logging it. Endpoints therefore never surface a
//! storage error to the client; a broken database shows up as an empty
//! dashboard and an operator log line, not a 500.

use crate::aggregate::{
    EventSummary, FUserEntry, FlipData, HistoryEntry, JudgeHistoryEntry, JudgeStat,
    ParticipantStat, TeamEntry, TotalFormula, UserEntry, build_event_summaries,
    build_fusers_data, build_judge_averages, build_judge_history, build_leaderboard,
    build_participant_history, build_participant_stats, build_teams_data, build_users_data,
};
use crate::logging;
use crate::store::{Store, StoreError};

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn log_query_failure(what: &str, err: &StoreError) {
    logging::error!(error = %err, "{what} query failed; returning empty result");
}

/// The producer leaderboard with per-event round tables.
pub fn flip_data(store: &Store, formula: TotalFormula) -> FlipData {
    match store.score_rows() {
        Ok(rows) => build_leaderboard(&rows, formula),
        Err(err) => {
            log_query_failure("flip data", &err);
            FlipData::default()
        }
    }
}

/// Judge averages over all score rows.
pub fn judges_data(store: &Store) -> Vec<JudgeStat> {
    match store.score_rows() {
        Ok(rows) => build_judge_averages(&rows),
        Err(err) => {
            log_query_failure("judges", &err);
            Vec::new()
        }
    }
}

/// Participant statistics: Users joined with their score averages.
pub fn participants_data(store: &Store) -> Vec<ParticipantStat> {
    let users = match store.users() {
        Ok(users) => users,
        Err(err) => {
            log_query_failure("participants", &err);
            return Vec::new();
        }
    };
    match store.score_rows() {
        Ok(rows) => build_participant_stats(&users, &rows),
        Err(err) => {
            log_query_failure("participants", &err);
            Vec::new()
        }
    }
}

/// Teams reference table, shaped for the dashboard.
pub fn teams_data(store: &Store) -> Vec<TeamEntry> {
    match store.teams() {
        Ok(teams) => build_teams_data(&teams),
        Err(err) => {
            log_query_failure("teams", &err);
            Vec::new()
        }
    }
}

/// Users reference table, shaped for the dashboard.
pub fn users_data(store: &Store) -> Vec<UserEntry> {
    match store.users() {
        Ok(users) => build_users_data(&users),
        Err(err) => {
            log_query_failure("users", &err);
            Vec::new()
        }
    }
}

/// FUsers reference table, shaped for the dashboard.
pub fn fusers_data(store: &Store) -> Vec<FUserEntry> {
    match store.fusers() {
        Ok(fusers) => build_fusers_data(&fusers),
        Err(err) => {
            log_query_failure("fusers", &err);
            Vec::new()
        }
    }
}

/// Per-event summaries with winners.
pub fn events_data(store: &Store) -> Vec<EventSummary> {
    match store.score_rows() {
        Ok(rows) => build_event_summaries(&rows),
        Err(err) => {
            log_query_failure("events", &err);
            Vec::new()
        }
    }
}

/// One participant's history, matched by display name.
pub fn participant_history(store: &Store, name: &str) -> Vec<HistoryEntry> {
    match store.score_rows_for_participant(name) {
        Ok(rows) => build_participant_history(&rows, name),
        Err(err) => {
            log_query_failure("participant history", &err);
            Vec::new()
        }
    }
}

/// One judge's scoring history, matched by name.
pub fn judge_history(store: &Store, name: &str) -> Vec<JudgeHistoryEntry> {
    match store.score_rows_for_judge(name) {
        Ok(rows) => build_judge_history(&rows, name),
        Err(err) => {
            log_query_failure("judge history", &err);
            Vec::new()
        }
    }
}
