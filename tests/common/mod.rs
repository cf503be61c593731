//! Common test utilities and fixtures.
//!
//! Builds a temporary SQLite database with the tournament schema, seeds it
//! through small row structs, and (behind the `server` feature) wires it to
//! an axum-test server for end-to-end requests.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{Connection, params};
use tempfile::TempDir;

/// A temporary tournament database with the full schema created.
pub struct TestDb {
    pub path: PathBuf,
    _temp_dir: TempDir, // Keep alive for test duration
}

const SCHEMA: &str = "
CREATE TABLE Scores (
    event_id INTEGER NOT NULL,
    round INTEGER NOT NULL,
    participant_id INTEGER,
    participant_name TEXT NOT NULL,
    participant_team TEXT,
    user_name TEXT NOT NULL,
    k1 REAL, k2 REAL, k3 REAL, k4 REAL, l REAL,
    t1 REAL, t2 REAL, t3 REAL, t4 REAL, t5 REAL, t6 REAL, t7 REAL, tl REAL,
    game_type INTEGER,
    date TEXT,
    time TEXT
);

CREATE TABLE Users (
    user_id INTEGER PRIMARY KEY,
    user_name TEXT NOT NULL,
    user_team_name TEXT,
    user_first_place INTEGER,
    user_second_place INTEGER,
    user_third_place INTEGER,
    user_team_wins INTEGER,
    user_team_games INTEGER,
    user_solo_wins INTEGER,
    user_solo_games INTEGER,
    l REAL, tl REAL, kall REAL, tall REAL
);

CREATE TABLE Teams (
    team_name TEXT NOT NULL,
    team_wins INTEGER,
    team_games INTEGER,
    tall REAL
);

CREATE TABLE FUsers (
    user_name TEXT NOT NULL,
    user_team_name TEXT,
    l REAL, tl REAL
);
";

/// One Scores row to seed, with defaults for the common case: event 1,
/// round 1, participant 1 "Alpha" scored 5.0 on each individual criterion.
pub struct ScoreSeed {
    pub event_id: i64,
    pub round: i64,
    pub participant_id: Option<i64>,
    pub participant_name: &'static str,
    pub participant_team: Option<&'static str>,
    pub judge_name: &'static str,
    pub k: [Option<f64>; 4],
    pub l: Option<f64>,
    pub t: [Option<f64>; 7],
    pub tl: Option<f64>,
    pub game_type: Option<i64>,
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
}

impl Default for ScoreSeed {
    fn default() -> Self {
        Self {
            event_id: 1,
            round: 1,
            participant_id: Some(1),
            participant_name: "Alpha",
            participant_team: None,
            judge_name: "JudgeOne",
            k: [Some(5.0); 4],
            l: None,
            t: [None; 7],
            tl: None,
            game_type: Some(1),
            date: Some("01.02.2024"),
            time: Some("12:00"),
        }
    }
}

impl TestDb {
    /// Create a fresh database with the tournament schema.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("database.db");
        let conn = Connection::open(&path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            path,
            _temp_dir: temp_dir,
        })
    }

    fn connect(&self) -> anyhow::Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Insert one Scores row.
    pub fn insert_score(&self, seed: &ScoreSeed) -> anyhow::Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO Scores (event_id, round, participant_id, participant_name, \
             participant_team, user_name, k1, k2, k3, k4, l, t1, t2, t3, t4, t5, t6, t7, tl, \
             game_type, date, time) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, \
             ?17, ?18, ?19, ?20, ?21, ?22)",
            params![
                seed.event_id,
                seed.round,
                seed.participant_id,
                seed.participant_name,
                seed.participant_team,
                seed.judge_name,
                seed.k[0],
                seed.k[1],
                seed.k[2],
                seed.k[3],
                seed.l,
                seed.t[0],
                seed.t[1],
                seed.t[2],
                seed.t[3],
                seed.t[4],
                seed.t[5],
                seed.t[6],
                seed.tl,
                seed.game_type,
                seed.date,
                seed.time,
            ],
        )?;
        Ok(())
    }

    /// Insert one Users row with the given id, name, team, and counters.
    pub fn insert_user(
        &self,
        user_id: i64,
        user_name: &str,
        user_team_name: Option<&str>,
        kall: f64,
        tall: f64,
    ) -> anyhow::Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO Users (user_id, user_name, user_team_name, user_first_place, \
             user_second_place, user_third_place, user_team_wins, user_team_games, \
             user_solo_wins, user_solo_games, l, tl, kall, tall) \
             VALUES (?1, ?2, ?3, 0, 0, 0, 0, 0, 0, 0, 0, 0, ?4, ?5)",
            params![user_id, user_name, user_team_name, kall, tall],
        )?;
        Ok(())
    }

    /// Insert one Teams row.
    pub fn insert_team(&self, team_name: &str, wins: i64, games: i64) -> anyhow::Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO Teams (team_name, team_wins, team_games, tall) VALUES (?1, ?2, ?3, 0)",
            params![team_name, wins, games],
        )?;
        Ok(())
    }

    /// Insert one FUsers row.
    pub fn insert_fuser(&self, user_name: &str, l: f64, tl: f64) -> anyhow::Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO FUsers (user_name, user_team_name, l, tl) VALUES (?1, NULL, ?2, ?3)",
            params![user_name, l, tl],
        )?;
        Ok(())
    }
}

// =============================================================================
// Test Application (server feature)
// =============================================================================

#[cfg(feature = "server")]
pub use app::TestApp;

#[cfg(feature = "server")]
mod app {
    use super::TestDb;
    use axum_test::TestServer;
    use flipboard::server::{AppState, Config, router};

    /// Test application wrapper over a seeded temporary database.
    ///
    /// Handlers open their own connection per request, so seeding through
    /// [`TestDb`] after construction is visible immediately.
    pub struct TestApp {
        pub server: TestServer,
        pub db: TestDb,
    }

    impl TestApp {
        /// Create a test application with a fresh, empty tournament schema.
        pub fn new() -> anyhow::Result<Self> {
            let db = TestDb::new()?;
            Self::start(db)
        }

        /// Create a test application over an existing database.
        pub fn start(db: TestDb) -> anyhow::Result<Self> {
            let config = Config::from_str(&format!(
                r#"
[server]
bind = "127.0.0.1"
port = 0

[database]
path = "{}"
"#,
                db.path.display()
            ))?;
            let state = AppState::from_config(&config)?;
            let server = TestServer::new(router(state, None))?;
            Ok(Self { server, db })
        }
    }
}
