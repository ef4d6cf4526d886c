//! Strategy parameters and account setup.
//!
//! Defaults are the tutorial constants the strategy shipped with; a host can
//! override them from a TOML fragment.

use serde::{Deserialize, Serialize};

/// Tunable strategy parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrategyParams {
    /// Short commodity symbol to trade (dominant contract resolved per bar).
    pub symbol: String,
    /// True-range averaging window, in daily bars.
    pub atr_window: usize,
    /// Length of the rolling ATR series and the smoothing span over it.
    pub ema_window: usize,
    /// Stop distance in units of smoothed ATR.
    pub ema_times: f64,
    /// Fraction of total account value risked per trade.
    pub risk_fraction: f64,
    /// Seed for the coin-flip RNG; fixed seed means a reproducible run.
    pub seed: u64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            symbol: "RB".to_string(),
            atr_window: 10,
            ema_window: 10,
            ema_times: 3.0,
            risk_fraction: 0.01,
            seed: 0,
        }
    }
}

impl StrategyParams {
    /// Parse parameters from a TOML fragment; absent keys keep defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Daily bars needed to form the rolling ATR series.
    pub fn history_len(&self) -> usize {
        self.atr_window + self.ema_window
    }
}

/// Account-level setup pushed to the host once at initialization.
/// Commission and margin accounting itself is the host's job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountSetup {
    pub open_commission: f64,
    pub close_commission: f64,
    pub close_today_commission: f64,
    pub margin_rate: f64,
}

impl Default for AccountSetup {
    fn default() -> Self {
        Self {
            open_commission: 0.000023,
            close_commission: 0.000023,
            close_today_commission: 0.0023,
            margin_rate: 0.15,
        }
    }
}
