//! Mutable strategy state carried across bar callbacks.

use serde::{Deserialize, Serialize};

use crate::domain::{Exposure, StopMark};

/// Everything the strategy remembers between bars.
///
/// The host owns position and cash ground truth; this is only the strategy's
/// working memory. Initialized once at start, mutated by the bar callback,
/// reset to neutral when the dominant contract rolls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyState {
    /// Dominant contract fetched this bar.
    pub dominant: Option<String>,
    /// Contract of the most recent trade; rollover is detected against it.
    pub last_traded: Option<String>,
    /// What is currently held.
    pub exposure: Exposure,
    /// Trailing stop record; zeroed while no stop is armed.
    pub stop: StopMark,
}

impl StrategyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to neutral after a forced liquidation: flat, stop zeroed.
    pub fn reset_position(&mut self) {
        self.exposure = Exposure::Flat;
        self.stop.clear();
    }
}
