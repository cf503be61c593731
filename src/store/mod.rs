//! Read-only SQLite row store.
//!
//! The aggregation side never writes: each request opens its own read-only
//! connection, runs its queries, and drops it on completion. That keeps
//! concurrent requests free of shared mutable state; SQLite handles the
//! concurrent readers.

mod error;

pub use error::StoreError;

use std::path::Path;

use rusqlite::{Connection, OpenFlags, Params, Row};

use crate::aggregate::{FUserRow, ScoreRow, TeamRow, UserRow};
use crate::logging;

const SCORE_COLUMNS: &str = "event_id, round, participant_id, participant_name, \
     participant_team, user_name, k1, k2, k3, k4, l, t1, t2, t3, t4, t5, t6, t7, tl, \
     game_type, date, time";

/// Handle to the tournament database, opened read-only.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the database at the given path. Fails if the file does not exist;
    /// this side never creates or migrates the database.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        logging::debug!(path = %path.display(), "opened score database");
        Ok(Self { conn })
    }

    /// Probe the connection with a trivial query.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    /// All score rows.
    pub fn score_rows(&self) -> Result<Vec<ScoreRow>, StoreError> {
        self.query_scores(&format!("SELECT {SCORE_COLUMNS} FROM Scores"), [])
    }

    /// Score rows for one participant, matched by display name.
    pub fn score_rows_for_participant(&self, name: &str) -> Result<Vec<ScoreRow>, StoreError> {
        self.query_scores(
            &format!("SELECT {SCORE_COLUMNS} FROM Scores WHERE participant_name = ?1"),
            [name],
        )
    }

    /// Score rows written by one judge.
    pub fn score_rows_for_judge(&self, name: &str) -> Result<Vec<ScoreRow>, StoreError> {
        self.query_scores(
            &format!("SELECT {SCORE_COLUMNS} FROM Scores WHERE user_name = ?1"),
            [name],
        )
    }

    /// All Users reference rows.
    pub fn users(&self) -> Result<Vec<UserRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT user_id, user_name, user_team_name, user_first_place, user_second_place, \
             user_third_place, user_team_wins, user_team_games, user_solo_wins, \
             user_solo_games, l, tl, kall, tall FROM Users",
        )?;
        let rows = stmt
            .query_map([], user_row_from)?
            .collect::<Result<Vec<_>, _>>()?;
        logging::trace!(rows = rows.len(), "fetched user rows");
        Ok(rows)
    }

    /// All Teams reference rows.
    pub fn teams(&self) -> Result<Vec<TeamRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_name, team_wins, team_games, tall FROM Teams")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(TeamRow {
                    team_name: row.get("team_name")?,
                    team_wins: row.get("team_wins")?,
                    team_games: row.get("team_games")?,
                    tall: row.get("tall")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        logging::trace!(rows = rows.len(), "fetched team rows");
        Ok(rows)
    }

    /// All FUsers reference rows.
    pub fn fusers(&self) -> Result<Vec<FUserRow>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT user_name, user_team_name, l, tl FROM FUsers")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(FUserRow {
                    user_name: row.get("user_name")?,
                    user_team_name: row.get("user_team_name")?,
                    l: row.get("l")?,
                    tl: row.get("tl")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        logging::trace!(rows = rows.len(), "fetched fuser rows");
        Ok(rows)
    }

    fn query_scores(&self, sql: &str, params: impl Params) -> Result<Vec<ScoreRow>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, score_row_from)?
            .collect::<Result<Vec<_>, _>>()?;
        logging::trace!(rows = rows.len(), "fetched score rows");
        Ok(rows)
    }
}

fn score_row_from(row: &Row<'_>) -> rusqlite::Result<ScoreRow> {
    Ok(ScoreRow {
        event_id: row.get("event_id")?,
        round: row.get("round")?,
        participant_id: row.get("participant_id")?,
        participant_name: row.get("participant_name")?,
        participant_team: row.get("participant_team")?,
        judge_name: row.get("user_name")?,
        k1: row.get("k1")?,
        k2: row.get("k2")?,
        k3: row.get("k3")?,
        k4: row.get("k4")?,
        l: row.get("l")?,
        t1: row.get("t1")?,
        t2: row.get("t2")?,
        t3: row.get("t3")?,
        t4: row.get("t4")?,
        t5: row.get("t5")?,
        t6: row.get("t6")?,
        t7: row.get("t7")?,
        tl: row.get("tl")?,
        game_type: row.get("game_type")?,
        date: row.get("date")?,
        time: row.get("time")?,
    })
}

fn user_row_from(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        user_team_name: row.get("user_team_name")?,
        user_first_place: row.get("user_first_place")?,
        user_second_place: row.get("user_second_place")?,
        user_third_place: row.get("user_third_place")?,
        user_team_wins: row.get("user_team_wins")?,
        user_team_games: row.get("user_team_games")?,
        user_solo_wins: row.get("user_solo_wins")?,
        user_solo_games: row.get("user_solo_games")?,
        l: row.get("l")?,
        tl: row.get("tl")?,
        kall: row.get("kall")?,
        tall: row.get("tall")?,
    })
}
