//! UI screens for the application.

pub mod gameover;
pub mod menu;
pub mod playing;

pub use gameover::{GameOverAction, GameOverScreen};
pub use menu::{MenuAction, MenuScreen};
pub use playing::PlayingScreen;

/// Screen navigation state.
///
/// Process-local and reset on restart; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Main menu with leaderboard
    #[default]
    Menu,
    /// Active run hosted by the gameplay engine
    Playing,
    /// Post-run summary
    GameOver,
}
