//! Minimax search configuration.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Enable alpha-beta pruning. Changes the work done, never the move.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

impl SearchConfig {
    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
