//! Leaderboard construction: producers ranked by total points, plus the
//! per-event round tables the dashboard drills into.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::ScoreRow;
use super::score::{TotalFormula, round1, row_total};

/// One participant's summed score within a single round of an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundScore {
    pub name: String,
    pub user_id: String,
    pub score: f64,
}

/// One event's round tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBoard {
    pub id: i64,
    pub name: String,
    /// Round label to ranked participant scores, best first.
    pub rounds: BTreeMap<String, Vec<RoundScore>>,
}

impl EventBoard {
    fn new(event_id: i64) -> Self {
        Self {
            id: event_id,
            name: format!("31-FLIP Event {}", short_event_tag(event_id)),
            rounds: BTreeMap::new(),
        }
    }
}

/// Aggregate view of one participant across all events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Producer {
    /// 1-based rank after the final descending sort.
    pub id: i64,
    pub name: String,
    pub user_id: String,
    pub total_points: f64,
    pub weighted_score: f64,
    pub total_works: i64,
    /// `"{event_id}-{round}"` to that round's total score.
    pub rounds: BTreeMap<String, f64>,
}

impl Producer {
    fn new(name: String, participant_id: i64) -> Self {
        Self {
            id: 0,
            name,
            user_id: participant_id.to_string(),
            total_points: 0.0,
            weighted_score: 0.0,
            total_works: 0,
            rounds: BTreeMap::new(),
        }
    }
}

/// The full leaderboard payload: ranked producers plus per-event round tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlipData {
    pub producers: Vec<Producer>,
    pub events: BTreeMap<String, EventBoard>,
}

/// The last four digits of an event id, used for display names.
fn short_event_tag(event_id: i64) -> String {
    let digits = event_id.to_string();
    let start = digits.len().saturating_sub(4);
    digits.get(start..).unwrap_or(digits.as_str()).to_string()
}

struct Cell {
    name: String,
    total: f64,
}

/// Build the producer leaderboard and per-event round tables from a row
/// snapshot.
///
/// Rows are grouped by (event, round, participant) and the per-judge totals
/// within a cell are summed, so a work scored by three judges counts all
/// three rows. Cell sums that are not positive are dropped entirely: they
/// appear in no round table and contribute nothing to a producer's totals.
///
/// Grouping is keyed by participant id; rows without one are skipped. The
/// result is deterministic regardless of input order, and empty input yields
/// an empty payload, not an error.
pub fn build_leaderboard(rows: &[ScoreRow], formula: TotalFormula) -> FlipData {
    // BTreeMap keys give a deterministic traversal order independent of row
    // order, which also fixes the first-seen tie-break among producers.
    let mut cells: BTreeMap<(i64, i64, i64), Cell> = BTreeMap::new();
    for row in rows {
        let Some(participant_id) = row.participant_id else {
            continue;
        };
        let cell = cells
            .entry((row.event_id, row.round, participant_id))
            .or_insert_with(|| Cell {
                name: row.participant_name.clone(),
                total: 0.0,
            });
        cell.total += row_total(row, formula);
    }

    let mut data = FlipData::default();
    let mut producer_index: HashMap<i64, usize> = HashMap::new();

    for (&(event_id, round, participant_id), cell) in &cells {
        if cell.total <= 0.0 {
            continue;
        }
        let score = round1(cell.total);

        let board = data
            .events
            .entry(event_id.to_string())
            .or_insert_with(|| EventBoard::new(event_id));
        board
            .rounds
            .entry(round.to_string())
            .or_default()
            .push(RoundScore {
                name: cell.name.clone(),
                user_id: participant_id.to_string(),
                score,
            });

        let index = *producer_index.entry(participant_id).or_insert_with(|| {
            data.producers
                .push(Producer::new(cell.name.clone(), participant_id));
            data.producers.len() - 1
        });
        if let Some(producer) = data.producers.get_mut(index) {
            producer.total_points += score;
            producer.total_works += 1;
            producer.weighted_score = round1(producer.total_points / producer.total_works as f64);
            producer.rounds.insert(format!("{event_id}-{round}"), score);
        }
    }

    for board in data.events.values_mut() {
        for listing in board.rounds.values_mut() {
            listing.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }

    // Stable sort keeps first-seen order as the tie-break.
    data.producers
        .sort_by(|a, b| b.total_points.total_cmp(&a.total_points));
    for (position, producer) in data.producers.iter_mut().enumerate() {
        producer.id = position as i64 + 1;
    }

    data
}
