//! Database schema definitions for Logslice.

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Score history table (append-only, one row per completed run)
CREATE TABLE IF NOT EXISTS scores (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    score INTEGER NOT NULL,
    logs_sliced INTEGER NOT NULL,
    max_combo INTEGER NOT NULL,
    played_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_scores_user_id ON scores(user_id);
CREATE INDEX IF NOT EXISTS idx_scores_user_played_at ON scores(user_id, played_at);

-- Leaderboard table (one mutable aggregate row per player)
CREATE TABLE IF NOT EXISTS leaderboard (
    user_id TEXT PRIMARY KEY,
    display_name TEXT NOT NULL,
    high_score INTEGER NOT NULL,
    total_logs_sliced INTEGER NOT NULL,
    games_played INTEGER NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_leaderboard_high_score ON leaderboard(high_score);
"#;

/// SQL for schema version tracking (migrations)
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version
pub const CURRENT_VERSION: i32 = 1;
