//! Score service: the four data-access operations over the store.

use chrono::Utc;
use thiserror::Error;

use crate::auth::{display_name, AuthProvider};
use crate::engine::GameOutcome;
use crate::storage::database::{Database, DatabaseError};

use super::types::{LeaderboardRow, ScoreRecord};
use super::BOARD_LIMIT;

/// Service exposing score history and leaderboard operations.
///
/// Reads take `&self`; submission takes `&mut self` because it runs inside a
/// database transaction. The store guarantees per-row atomicity of the
/// leaderboard upsert, so this layer adds no coordination of its own.
pub struct ScoreService {
    db: Database,
}

impl ScoreService {
    /// Create a service over the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The caller's most recent score records, newest first.
    ///
    /// Unauthenticated callers get an empty list, not an error.
    pub fn my_scores(
        &self,
        auth: &dyn AuthProvider,
    ) -> Result<Vec<ScoreRecord>, ScoreServiceError> {
        let Some(identity) = auth.identity() else {
            return Ok(Vec::new());
        };
        Ok(self.db.list_scores(&identity.user_id, BOARD_LIMIT)?)
    }

    /// The caller's leaderboard row.
    ///
    /// `None` when the caller is unauthenticated or has never submitted.
    pub fn my_stats(
        &self,
        auth: &dyn AuthProvider,
    ) -> Result<Option<LeaderboardRow>, ScoreServiceError> {
        let Some(identity) = auth.identity() else {
            return Ok(None);
        };
        Ok(self.db.get_leaderboard_row(&identity.user_id)?)
    }

    /// The top leaderboard rows, highest score first. No auth required.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, ScoreServiceError> {
        Ok(self.db.top_leaderboard_rows(BOARD_LIMIT)?)
    }

    /// Submit a completed run for the authenticated caller.
    ///
    /// Appends a score record stamped with the current time and upserts the
    /// caller's leaderboard row in one transaction. Fails with
    /// [`ScoreServiceError::NotAuthenticated`] when there is no identity;
    /// nothing is written in that case.
    pub fn submit(
        &mut self,
        auth: &dyn AuthProvider,
        outcome: &GameOutcome,
    ) -> Result<(), ScoreServiceError> {
        let identity = auth
            .identity()
            .ok_or(ScoreServiceError::NotAuthenticated)?;

        let record = ScoreRecord::from_outcome(identity.user_id, outcome, Utc::now());
        let name = display_name(identity);
        self.db.record_score(&record, &name)?;

        tracing::debug!(
            "Recorded score {} ({} logs, {}x combo) for {}",
            outcome.score,
            outcome.logs_sliced,
            outcome.max_combo,
            name
        );

        Ok(())
    }
}

/// Score service errors.
#[derive(Debug, Error)]
pub enum ScoreServiceError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionAuthProvider;

    fn service() -> ScoreService {
        ScoreService::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_unauthenticated_reads_are_empty_not_errors() {
        let service = service();
        let auth = SessionAuthProvider::new();

        assert!(service.my_scores(&auth).unwrap().is_empty());
        assert!(service.my_stats(&auth).unwrap().is_none());
    }

    #[test]
    fn test_unauthenticated_submit_fails_and_writes_nothing() {
        let mut service = service();
        let auth = SessionAuthProvider::new();

        let result = service.submit(&auth, &GameOutcome::new(100, 20, 5));
        assert!(matches!(result, Err(ScoreServiceError::NotAuthenticated)));
        assert!(service.leaderboard().unwrap().is_empty());
    }

    #[test]
    fn test_submit_then_read_back() {
        let mut service = service();
        let mut auth = SessionAuthProvider::new();
        auth.sign_in("ada@example.com", None);

        service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();

        let stats = service.my_stats(&auth).unwrap().unwrap();
        assert_eq!(stats.display_name, "ada");
        assert_eq!(stats.high_score, 100);
        assert_eq!(stats.games_played, 1);

        let scores = service.my_scores(&auth).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].max_combo, 5);
    }

    #[test]
    fn test_leaderboard_visible_without_auth() {
        let mut service = service();
        let mut auth = SessionAuthProvider::new();
        auth.sign_in("ada@example.com", None);
        service.submit(&auth, &GameOutcome::new(100, 20, 5)).unwrap();
        auth.sign_out();

        let board = service.leaderboard().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].high_score, 100);
    }
}
