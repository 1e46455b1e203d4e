//! Gameplay engine seam.
//!
//! The slicing gameplay (spawning, collision, combo timing) lives behind the
//! [`GameEngine`] trait; the UI shell only hosts it and consumes the outcome
//! it reports when a run ends. [`ScriptedEngine`] is a stand-in that replays
//! predetermined outcomes so the shell flow can be exercised end to end.

pub mod scripted;
pub mod types;

pub use scripted::ScriptedEngine;
pub use types::GameOutcome;

use egui::Ui;

/// A hosted gameplay engine.
pub trait GameEngine {
    /// Prepare for a fresh run.
    fn reset(&mut self);

    /// Render one frame of gameplay.
    ///
    /// Returns `Some` exactly once per run, when the run has ended.
    fn show(&mut self, ui: &mut Ui) -> Option<GameOutcome>;
}
