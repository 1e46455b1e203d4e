//! Score record and leaderboard row types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::GameOutcome;

/// One immutable entry representing a single completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Owning player
    pub user_id: Uuid,
    /// Final score
    pub score: u32,
    /// Logs sliced during the run
    pub logs_sliced: u32,
    /// Longest combo achieved
    pub max_combo: u32,
    /// When the run was played
    pub played_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Build a record for an outcome played by `user_id` at `played_at`.
    pub fn from_outcome(user_id: Uuid, outcome: &GameOutcome, played_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            score: outcome.score,
            logs_sliced: outcome.logs_sliced,
            max_combo: outcome.max_combo,
            played_at,
        }
    }
}

/// One mutable per-player aggregate over all of that player's score records.
///
/// Created on first submission; thereafter only max/sum/count updates are
/// applied, so every field is monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Owning player (unique per row)
    pub user_id: Uuid,
    /// Display name refreshed on every submission
    pub display_name: String,
    /// Highest score over all submissions
    pub high_score: u32,
    /// Sum of logs sliced over all submissions
    pub total_logs_sliced: u64,
    /// Number of submissions
    pub games_played: u32,
    /// Last submission time
    pub updated_at: DateTime<Utc>,
}
