//! Passthrough views over the Users / Teams / FUsers reference tables.
//!
//! These carry no aggregation beyond null-defaulting, ordering, and list
//! numbering; the row store hands them through largely unchanged.

use serde::Serialize;

use super::{FUserRow, TeamRow, UserRow};

/// One Users row shaped for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserEntry {
    pub id: i64,
    pub user_name: String,
    pub user_team_name: Option<String>,
    pub user_first_place: i64,
    pub user_second_place: i64,
    pub user_third_place: i64,
    pub user_solo_games: i64,
    pub l: f64,
    pub tl: f64,
    pub kall: f64,
    pub tall: f64,
}

/// One Teams row shaped for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamEntry {
    pub id: i64,
    pub team_name: String,
    pub team_wins: i64,
    pub team_games: i64,
    pub tall: f64,
}

/// One FUsers row shaped for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FUserEntry {
    pub id: i64,
    pub user_name: String,
    pub user_team_name: Option<String>,
    pub l: f64,
    pub tl: f64,
}

fn number<T>(entries: &mut [T], set_id: impl Fn(&mut T, i64)) {
    for (position, entry) in entries.iter_mut().enumerate() {
        set_id(entry, position as i64 + 1);
    }
}

/// Users ordered by accumulated individual points.
pub fn build_users_data(users: &[UserRow]) -> Vec<UserEntry> {
    let mut entries: Vec<UserEntry> = users
        .iter()
        .map(|user| UserEntry {
            id: 0,
            user_name: user.user_name.clone(),
            user_team_name: user.user_team_name.clone(),
            user_first_place: user.user_first_place.unwrap_or(0),
            user_second_place: user.user_second_place.unwrap_or(0),
            user_third_place: user.user_third_place.unwrap_or(0),
            user_solo_games: user.user_solo_games.unwrap_or(0),
            l: user.l.unwrap_or(0.0),
            tl: user.tl.unwrap_or(0.0),
            kall: user.kall.unwrap_or(0.0),
            tall: user.tall.unwrap_or(0.0),
        })
        .collect();
    entries.sort_by(|a, b| b.kall.total_cmp(&a.kall));
    number(&mut entries, |entry, id| entry.id = id);
    entries
}

/// Teams deduplicated by name (first row wins), ordered by wins.
pub fn build_teams_data(teams: &[TeamRow]) -> Vec<TeamEntry> {
    let mut entries: Vec<TeamEntry> = Vec::new();
    for team in teams {
        if entries.iter().any(|entry| entry.team_name == team.team_name) {
            continue;
        }
        entries.push(TeamEntry {
            id: 0,
            team_name: team.team_name.clone(),
            team_wins: team.team_wins.unwrap_or(0),
            team_games: team.team_games.unwrap_or(0),
            tall: team.tall.unwrap_or(0.0),
        });
    }
    entries.sort_by(|a, b| b.team_wins.cmp(&a.team_wins));
    number(&mut entries, |entry, id| entry.id = id);
    entries
}

/// FUsers ordered by accumulated bonus points.
pub fn build_fusers_data(fusers: &[FUserRow]) -> Vec<FUserEntry> {
    let mut entries: Vec<FUserEntry> = fusers
        .iter()
        .map(|fuser| FUserEntry {
            id: 0,
            user_name: fuser.user_name.clone(),
            user_team_name: fuser.user_team_name.clone(),
            l: fuser.l.unwrap_or(0.0),
            tl: fuser.tl.unwrap_or(0.0),
        })
        .collect();
    entries.sort_by(|a, b| b.l.total_cmp(&a.l));
    number(&mut entries, |entry, id| entry.id = id);
    entries
}
