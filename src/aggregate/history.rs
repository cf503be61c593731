//! Participant participation history.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ScoreRow;
use super::score::{judged_row_score, round2};

/// One (event, round) cell of a participant's history: the averaged score
/// across the judges who scored it, and who those judges were.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub event_id: i64,
    pub round: i64,
    pub participant_name: String,
    pub participant_team: Option<String>,
    pub avg_score: f64,
    pub judges_count: i64,
    /// Sortable `YYYY-MM-DD` key derived from the stored `DD.MM.YYYY` date.
    pub event_date: Option<String>,
    /// Distinct judge names in first-seen order.
    pub judges: Vec<String>,
}

/// Reorder a stored `DD.MM.YYYY` date into a sortable `YYYY-MM-DD` key.
///
/// Strings that don't fit the layout are passed through unchanged; they sort
/// behind real dates rather than aborting the aggregation.
pub(crate) fn event_date_key(date: Option<&str>) -> Option<String> {
    let date = date?;
    match (date.get(6..10), date.get(3..5), date.get(0..2)) {
        (Some(year), Some(month), Some(day)) => Some(format!("{year}-{month}-{day}")),
        _ => Some(date.to_string()),
    }
}

#[derive(Default)]
struct Group {
    score_sum: f64,
    rows: i64,
    event_date: Option<String>,
    judges: Vec<String>,
}

/// Build a participant's history, newest event first.
///
/// The lookup is by participant *name*, not id: the dashboard links histories
/// from display names. Rows are grouped per (event, round, name, team) cell
/// and averaged with the judged-row convention.
pub fn build_participant_history(rows: &[ScoreRow], participant_name: &str) -> Vec<HistoryEntry> {
    let mut groups: BTreeMap<(i64, i64, Option<&str>), Group> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.participant_name == participant_name) {
        let key = (row.event_id, row.round, row.participant_team.as_deref());
        let group = groups.entry(key).or_default();
        group.score_sum += judged_row_score(row);
        group.rows += 1;
        if let Some(date_key) = event_date_key(row.date.as_deref()) {
            match &group.event_date {
                Some(current) if *current <= date_key => {}
                _ => group.event_date = Some(date_key),
            }
        }
        if !group.judges.iter().any(|judge| judge == &row.judge_name) {
            group.judges.push(row.judge_name.clone());
        }
    }

    let mut entries: Vec<HistoryEntry> = groups
        .into_iter()
        .map(|((event_id, round, team), group)| HistoryEntry {
            event_id,
            round,
            participant_name: participant_name.to_string(),
            participant_team: team.map(str::to_string),
            avg_score: round2(group.score_sum / group.rows as f64),
            judges_count: group.rows,
            event_date: group.event_date,
            judges: group.judges,
        })
        .collect();

    entries.sort_by(|a, b| b.event_date.cmp(&a.event_date));
    entries
}
