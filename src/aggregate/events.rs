//! Per-event summaries: rounds, participants, and the event winner.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use super::ScoreRow;
use super::history::event_date_key;
use super::score::game_type_score;

/// One participant's accumulated game-type-conditional score in an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventParticipant {
    pub name: String,
    pub team: Option<String>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
}

/// Summary of one tournament event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    /// Event id as text, matching how the dashboard addresses events.
    pub id: String,
    pub date: Option<String>,
    pub game_type: Option<i64>,
    pub game_type_name: &'static str,
    /// Team name (or participant name when teamless) of the highest total;
    /// `None` for an event with no scored participants.
    pub winner: Option<String>,
    pub rounds: Vec<String>,
    pub participants: Vec<EventParticipant>,
}

fn game_type_name(game_type: Option<i64>) -> &'static str {
    match game_type {
        Some(1) => "main",
        Some(2) => "team main",
        Some(3) => "free",
        Some(4) => "free team",
        _ => "unknown",
    }
}

#[derive(Default)]
struct EventAcc {
    date: Option<String>,
    game_type: Option<i64>,
    seen_meta: bool,
    rounds: BTreeSet<i64>,
    participants: Vec<EventParticipant>,
    index: HashMap<String, usize>,
}

/// Build one summary per event, newest event first.
///
/// Participants are grouped by display name (the event table shows names,
/// not ids) and their game-type-conditional scores summed across all rounds
/// and judges. The winner is the argmax of those totals, with the first-seen
/// participant winning ties.
pub fn build_event_summaries(rows: &[ScoreRow]) -> Vec<EventSummary> {
    let mut events: BTreeMap<i64, EventAcc> = BTreeMap::new();

    for row in rows {
        let acc = events.entry(row.event_id).or_default();
        if !acc.seen_meta {
            acc.date = row.date.clone();
            acc.game_type = row.game_type;
            acc.seen_meta = true;
        }
        acc.rounds.insert(row.round);

        let game_type = acc.game_type;
        let index = match acc.index.get(row.participant_name.as_str()) {
            Some(&index) => index,
            None => {
                acc.participants.push(EventParticipant {
                    name: row.participant_name.clone(),
                    team: row.participant_team.clone(),
                    total_score: 0.0,
                });
                let index = acc.participants.len() - 1;
                acc.index.insert(row.participant_name.clone(), index);
                index
            }
        };
        if let Some(participant) = acc.participants.get_mut(index) {
            participant.total_score += game_type_score(row, game_type);
        }
    }

    let mut summaries: Vec<EventSummary> = events
        .into_iter()
        .map(|(event_id, acc)| {
            // First-seen participant wins ties, so fold with a strict compare
            // instead of max_by (which keeps the last maximum).
            let winner = acc
                .participants
                .iter()
                .fold(None::<&EventParticipant>, |best, candidate| match best {
                    Some(current) if candidate.total_score <= current.total_score => best,
                    _ => Some(candidate),
                })
                .map(|best| best.team.clone().unwrap_or_else(|| best.name.clone()));
            EventSummary {
                id: event_id.to_string(),
                date: acc.date,
                game_type: acc.game_type,
                game_type_name: game_type_name(acc.game_type),
                winner,
                rounds: acc
                    .rounds
                    .iter()
                    .map(|round| format!("Round {round}"))
                    .collect(),
                participants: acc.participants,
            }
        })
        .collect();

    // Newest first; event id breaks date ties.
    summaries.sort_by(|a, b| {
        let a_key = event_date_key(a.date.as_deref());
        let b_key = event_date_key(b.date.as_deref());
        b_key.cmp(&a_key).then_with(|| b.id.cmp(&a.id))
    });
    summaries
}
