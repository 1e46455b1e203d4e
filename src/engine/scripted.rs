//! Scripted engine stand-in.

use std::collections::VecDeque;

use egui::{RichText, Ui};

use super::types::GameOutcome;
use super::GameEngine;

/// Engine that ends each run with the next queued outcome.
///
/// Renders a minimal placeholder with an "End Run" control; the queued
/// outcome (or a zeroed one when the queue is empty) is reported when the
/// control is used. Lets the shell's menu/playing/gameover flow and score
/// submission be driven without the slicing gameplay present.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    queued: VecDeque<GameOutcome>,
    finished: bool,
}

impl ScriptedEngine {
    /// Create an engine with an empty outcome queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that will replay the given outcomes in order.
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = GameOutcome>) -> Self {
        Self {
            queued: outcomes.into_iter().collect(),
            finished: false,
        }
    }

    /// Queue another outcome for a later run.
    pub fn queue(&mut self, outcome: GameOutcome) {
        self.queued.push_back(outcome);
    }
}

impl GameEngine for ScriptedEngine {
    fn reset(&mut self) {
        self.finished = false;
    }

    fn show(&mut self, ui: &mut Ui) -> Option<GameOutcome> {
        if self.finished {
            return None;
        }

        let mut ended = false;
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("\u{1FA93}").size(64.0));
            ui.add_space(12.0);
            ui.label(RichText::new("Run in progress").size(20.0).weak());
            ui.add_space(24.0);
            if ui.button(RichText::new("End Run").size(16.0)).clicked() {
                ended = true;
            }
        });

        if ended {
            self.finished = true;
            Some(self.queued.pop_front().unwrap_or_default())
        } else {
            None
        }
    }
}
