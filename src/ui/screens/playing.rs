//! Active run screen.

use egui::Ui;

use crate::engine::{GameEngine, GameOutcome};

/// Hosts the gameplay engine while a run is active.
///
/// Owns no state of its own; the engine draws itself and reports the outcome
/// when the run ends.
#[derive(Debug, Default)]
pub struct PlayingScreen;

impl PlayingScreen {
    /// Render one frame of the hosted engine.
    ///
    /// Returns the run outcome when the engine reports the run has ended.
    pub fn show(ui: &mut Ui, engine: &mut dyn GameEngine) -> Option<GameOutcome> {
        engine.show(ui)
    }
}
