//! Logslice - Log-Slicing Arcade Game
//!
//! A casual desktop arcade game: slice an endless barrage of falling logs,
//! build combos, and climb the local leaderboard. Provides a player session
//! with derived display names, per-play score history, and a per-player
//! aggregate leaderboard backed by SQLite.

pub mod auth;
pub mod engine;
pub mod scores;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use auth::{AuthProvider, Identity, SessionAuthProvider};
pub use engine::{GameEngine, GameOutcome};
pub use scores::service::ScoreService;
pub use storage::database::Database;
