//! Engine-reported run outcome.

use serde::{Deserialize, Serialize};

/// Final tallies of a single completed run, as reported by the engine.
///
/// All counts are unsigned; negative submissions are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Final score
    pub score: u32,
    /// Number of logs sliced during the run
    pub logs_sliced: u32,
    /// Longest combo achieved
    pub max_combo: u32,
}

impl GameOutcome {
    /// Create an outcome from final tallies.
    pub fn new(score: u32, logs_sliced: u32, max_combo: u32) -> Self {
        Self {
            score,
            logs_sliced,
            max_combo,
        }
    }
}
