//! Application configuration.
//!
//! Persists the signed-in player identity so it stays stable across
//! restarts, plus UI preferences. Stored as TOML in the platform data
//! directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::auth::Identity;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Persisted player session
    pub player: PlayerSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            player: PlayerSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl AppConfig {
    /// Path of the SQLite database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("logslice.db")
    }

    /// Identity recovered from a persisted session, if complete.
    pub fn persisted_identity(&self) -> Option<Identity> {
        match (&self.player.account, self.player.user_id) {
            (Some(account), Some(user_id)) => Some(Identity {
                user_id,
                account: Some(account.clone()),
            }),
            _ => None,
        }
    }

    /// Remember the signed-in identity.
    pub fn remember_identity(&mut self, identity: &Identity) {
        self.player.account = identity.account.clone();
        self.player.user_id = Some(identity.user_id);
    }

    /// Forget the persisted session.
    pub fn forget_identity(&mut self) {
        self.player.account = None;
        self.player.user_id = None;
    }
}

/// Persisted player session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Account identifier from the last sign-in
    pub account: Option<String>,
    /// Stable user id minted at first sign-in
    pub user_id: Option<Uuid>,
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font scale multiplier
    pub font_scale: f32,
    /// Show the leaderboard panel on the menu screen
    pub show_leaderboard: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_scale: 1.0,
            show_leaderboard: true,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "logslice", "Logslice")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
