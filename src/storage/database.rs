//! Database operations using rusqlite.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::scores::types::{LeaderboardRow, ScoreRecord};
use crate::storage::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &PathBuf) -> Result<Self, DatabaseError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DatabaseError::IoError(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        let db = Self { conn };
        db.initialize()?;

        Ok(db)
    }

    /// Initialize the database schema.
    fn initialize(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

        let current_version = self.get_schema_version()?;

        if current_version < CURRENT_VERSION {
            self.migrate(current_version)?;
        }

        Ok(())
    }

    /// Get the current schema version.
    fn get_schema_version(&self) -> Result<i32, DatabaseError> {
        let result: SqliteResult<i32> = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(version),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Run database migrations.
    fn migrate(&self, from_version: i32) -> Result<(), DatabaseError> {
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

            tracing::info!("Database migrated to version {}", CURRENT_VERSION);
        }

        // Future migrations would go here:
        // if from_version < 2 { ... }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ========== Score submission ==========

    /// Record a completed run: append the score record and upsert the
    /// player's leaderboard row in one transaction.
    ///
    /// The upsert is a single `INSERT ... ON CONFLICT DO UPDATE`, so the
    /// get-or-create-then-update is atomic per player row and concurrent
    /// submissions cannot lose increments.
    pub fn record_score(
        &mut self,
        record: &ScoreRecord,
        display_name: &str,
    ) -> Result<(), DatabaseError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        tx.execute(
            "INSERT INTO scores (id, user_id, score, logs_sliced, max_combo, played_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id.to_string(),
                record.user_id.to_string(),
                record.score,
                record.logs_sliced,
                record.max_combo,
                record.played_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tx.execute(
            "INSERT INTO leaderboard (user_id, display_name, high_score, total_logs_sliced,
             games_played, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5)
             ON CONFLICT(user_id) DO UPDATE SET
                 high_score = MAX(high_score, excluded.high_score),
                 total_logs_sliced = total_logs_sliced + excluded.total_logs_sliced,
                 games_played = games_played + 1,
                 display_name = excluded.display_name,
                 updated_at = excluded.updated_at",
            params![
                record.user_id.to_string(),
                display_name,
                record.score,
                record.logs_sliced,
                record.played_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tx.commit()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    // ========== Score history queries ==========

    /// List a player's score records, newest first.
    pub fn list_scores(
        &self,
        user_id: &Uuid,
        limit: usize,
    ) -> Result<Vec<ScoreRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, score, logs_sliced, max_combo, played_at
                 FROM scores WHERE user_id = ?1
                 ORDER BY played_at DESC LIMIT ?2",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![user_id.to_string(), limit as i64], |row| {
                Ok(ScoreRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    score: row.get(2)?,
                    logs_sliced: row.get(3)?,
                    max_combo: row.get(4)?,
                    played_at: row.get(5)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut scores = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            scores.push(row.into_score_record()?);
        }

        Ok(scores)
    }

    /// Count score records for a player.
    pub fn count_scores(&self, user_id: &Uuid) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM scores WHERE user_id = ?1",
                params![user_id.to_string()],
                |row| row.get(0),
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }

    // ========== Leaderboard queries ==========

    /// Get a player's leaderboard row, if one exists.
    pub fn get_leaderboard_row(
        &self,
        user_id: &Uuid,
    ) -> Result<Option<LeaderboardRow>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT user_id, display_name, high_score, total_logs_sliced, games_played,
                 updated_at FROM leaderboard WHERE user_id = ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let result = stmt.query_row(params![user_id.to_string()], |row| {
            Ok(LeaderboardRowRaw {
                user_id: row.get(0)?,
                display_name: row.get(1)?,
                high_score: row.get(2)?,
                total_logs_sliced: row.get(3)?,
                games_played: row.get(4)?,
                updated_at: row.get(5)?,
            })
        });

        match result {
            Ok(row) => Ok(Some(row.into_leaderboard_row()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Get the top leaderboard rows ordered by high score descending.
    pub fn top_leaderboard_rows(&self, limit: usize) -> Result<Vec<LeaderboardRow>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT user_id, display_name, high_score, total_logs_sliced, games_played,
                 updated_at FROM leaderboard
                 ORDER BY high_score DESC LIMIT ?1",
            )
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(LeaderboardRowRaw {
                    user_id: row.get(0)?,
                    display_name: row.get(1)?,
                    high_score: row.get(2)?,
                    total_logs_sliced: row.get(3)?,
                    games_played: row.get(4)?,
                    updated_at: row.get(5)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut board = Vec::new();
        for row in rows {
            let row = row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            board.push(row.into_leaderboard_row()?);
        }

        Ok(board)
    }
}

/// Intermediate struct for reading score rows from database.
struct ScoreRow {
    id: String,
    user_id: String,
    score: u32,
    logs_sliced: u32,
    max_combo: u32,
    played_at: String,
}

impl ScoreRow {
    fn into_score_record(self) -> Result<ScoreRecord, DatabaseError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DatabaseError::DeserializationError(format!("Invalid UUID: {}", e)))?;

        let user_id = Uuid::parse_str(&self.user_id).map_err(|e| {
            DatabaseError::DeserializationError(format!("Invalid user UUID: {}", e))
        })?;

        let played_at = DateTime::parse_from_rfc3339(&self.played_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid played_at date: {}", e))
            })?;

        Ok(ScoreRecord {
            id,
            user_id,
            score: self.score,
            logs_sliced: self.logs_sliced,
            max_combo: self.max_combo,
            played_at,
        })
    }
}

/// Intermediate struct for reading leaderboard rows from database.
struct LeaderboardRowRaw {
    user_id: String,
    display_name: String,
    high_score: u32,
    total_logs_sliced: i64,
    games_played: u32,
    updated_at: String,
}

impl LeaderboardRowRaw {
    fn into_leaderboard_row(self) -> Result<LeaderboardRow, DatabaseError> {
        let user_id = Uuid::parse_str(&self.user_id).map_err(|e| {
            DatabaseError::DeserializationError(format!("Invalid user UUID: {}", e))
        })?;

        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DatabaseError::DeserializationError(format!("Invalid updated_at date: {}", e))
            })?;

        Ok(LeaderboardRow {
            user_id,
            display_name: self.display_name,
            high_score: self.high_score,
            total_logs_sliced: self.total_logs_sliced as u64,
            games_played: self.games_played,
            updated_at,
        })
    }
}

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}
