//! Reusable UI widgets.

pub mod leaderboard;
pub mod stats;

pub use leaderboard::LeaderboardPanel;
pub use stats::StatsPanel;
