//! Score history and leaderboard service.

pub mod service;
pub mod types;

pub use service::{ScoreService, ScoreServiceError};
pub use types::{LeaderboardRow, ScoreRecord};

/// Maximum number of rows returned by leaderboard and history queries.
pub const BOARD_LIMIT: usize = 10;
