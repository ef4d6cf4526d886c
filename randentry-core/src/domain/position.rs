//! Position side, exposure state, and the trailing stop mark.

use serde::{Deserialize, Serialize};

/// Side of a futures position. Long and short legs are held and closed
/// independently by the host, so orders are always side-qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

/// What the strategy currently holds.
///
/// A tagged state instead of two independent booleans: the strategy can never
/// be long and short at once, and the compiler enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Exposure {
    #[default]
    Flat,
    Long,
    Short,
}

impl Exposure {
    pub fn is_flat(&self) -> bool {
        matches!(self, Exposure::Flat)
    }

    /// The open side, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            Exposure::Flat => None,
            Exposure::Long => Some(Side::Long),
            Exposure::Short => Some(Side::Short),
        }
    }
}

impl From<Side> for Exposure {
    fn from(side: Side) -> Self {
        match side {
            Side::Long => Exposure::Long,
            Side::Short => Exposure::Short,
        }
    }
}

/// Host-reported view of one side of a position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Contracts held on this side. Zero means no position.
    pub quantity: i64,
    /// Average fill price of the open contracts.
    pub avg_price: f64,
}

impl PositionSnapshot {
    pub fn is_open(&self) -> bool {
        self.quantity != 0
    }
}

/// Trailing stop record: the current stop level plus the volatility unit the
/// stop trails by. Zeroed while no stop is armed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StopMark {
    /// Current stop price (high-water mark for longs, low-water for shorts).
    pub level: f64,
    /// Distance the stop trails behind the close, fixed at entry.
    pub unit: f64,
}

impl StopMark {
    pub fn new(level: f64, unit: f64) -> Self {
        Self { level, unit }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Propose a new stop for a long: only ever ratchets upward.
    pub fn ratchet_up(&mut self, proposed: f64) -> f64 {
        self.level = proposed.max(self.level);
        self.level
    }

    /// Propose a new stop for a short: only ever ratchets downward.
    pub fn ratchet_down(&mut self, proposed: f64) -> f64 {
        self.level = proposed.min(self.level);
        self.level
    }
}
