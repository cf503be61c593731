//! Participant statistics: the Users table joined with score averages.

use std::collections::HashMap;

use serde::Serialize;

use super::score::{judged_row_score, round2, team_row_score};
use super::{ScoreRow, UserRow};

/// One participant's statistics row for the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantStat {
    /// 1-based list position after sorting.
    pub id: i64,
    pub participant_name: String,
    pub team_name: Option<String>,
    pub kall: f64,
    pub tall: f64,
    pub user_team_wins: i64,
    pub user_team_games: i64,
    pub user_solo_wins: i64,
    pub user_solo_games: i64,
    pub avg_main_score: f64,
    pub avg_team_score: f64,
    pub total_score: f64,
}

#[derive(Default)]
struct ScoreAcc {
    main_sum: f64,
    team_sum: f64,
    rows: i64,
}

/// Join Users with their score rows and compute per-participant averages.
///
/// Users with no scored rows get 0.0 averages rather than a division by
/// zero; they still appear in the table with their counters. Sorted by
/// accumulated points (`kall + tall`) descending.
pub fn build_participant_stats(users: &[UserRow], rows: &[ScoreRow]) -> Vec<ParticipantStat> {
    let mut scores: HashMap<i64, ScoreAcc> = HashMap::new();
    for row in rows {
        let Some(participant_id) = row.participant_id else {
            continue;
        };
        let acc = scores.entry(participant_id).or_default();
        acc.main_sum += judged_row_score(row);
        acc.team_sum += team_row_score(row);
        acc.rows += 1;
    }

    let mut stats: Vec<ParticipantStat> = users
        .iter()
        .map(|user| {
            let acc = user.user_id.and_then(|id| scores.get(&id));
            let (avg_main_score, avg_team_score) = match acc {
                Some(acc) if acc.rows > 0 => (
                    round2(acc.main_sum / acc.rows as f64),
                    round2(acc.team_sum / acc.rows as f64),
                ),
                _ => (0.0, 0.0),
            };
            let kall = user.kall.unwrap_or(0.0);
            let tall = user.tall.unwrap_or(0.0);
            ParticipantStat {
                id: 0,
                participant_name: user.user_name.clone(),
                team_name: user.user_team_name.clone(),
                kall,
                tall,
                user_team_wins: user.user_team_wins.unwrap_or(0),
                user_team_games: user.user_team_games.unwrap_or(0),
                user_solo_wins: user.user_solo_wins.unwrap_or(0),
                user_solo_games: user.user_solo_games.unwrap_or(0),
                avg_main_score,
                avg_team_score,
                total_score: kall + tall,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for (position, stat) in stats.iter_mut().enumerate() {
        stat.id = position as i64 + 1;
    }
    stats
}
