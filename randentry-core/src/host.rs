//! The host platform seam.
//!
//! The backtesting/live platform owns market data, order routing, portfolio
//! ground truth, reference data, and the trading calendar. The strategy sees
//! all of it through the [`Host`] trait and is driven through
//! [`TradingCallbacks`], so the whole strategy runs against a scripted mock
//! in tests.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Bar, PositionSnapshot, Side};
use crate::strategy::AccountSetup;

/// Failures surfaced by host collaborators. Order rejections and data outages
/// beyond these are the host's problem; the strategy only propagates.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no market data for {code}")]
    NoData { code: String },

    #[error("unknown instrument {code}")]
    UnknownInstrument { code: String },

    #[error("order rejected for {code}: {reason}")]
    OrderRejected { code: String, reason: String },
}

/// Everything the strategy consumes from the platform.
///
/// All calls are synchronous from the strategy's point of view and complete
/// before the callback returns. Orders are fire-and-forget: the strategy never
/// sees order ids or partial fills, it only re-reads position state.
pub trait Host {
    /// Current trading date.
    fn today(&self) -> NaiveDate;

    /// Latest tick/trade price for a contract.
    fn last_price(&self, code: &str) -> Result<f64, HostError>;

    /// Close of the most recent completed bar.
    fn last_bar_close(&self, code: &str) -> Result<f64, HostError>;

    /// Trailing daily OHLC history, oldest first. May return fewer rows than
    /// requested (or none) near the start of a contract's life.
    fn daily_bars(&self, code: &str, count: usize) -> Result<Vec<Bar>, HostError>;

    /// Submit a market order for `units` contracts on the given side.
    fn submit_order(&mut self, code: &str, units: i64, side: Side) -> Result<(), HostError>;

    /// Close the entire position on one side of a contract (target zero).
    fn close_position(&mut self, code: &str, side: Side) -> Result<(), HostError>;

    /// Current position on one side of a contract, if any.
    fn position(&self, code: &str, side: Side) -> Option<PositionSnapshot>;

    /// Total account value (cash + margin + open PnL).
    fn total_value(&self) -> f64;

    /// Currently dominant contract code for a short symbol.
    fn dominant_contract(&self, symbol: &str) -> Result<String, HostError>;

    /// Delivery/expiry date of a contract.
    fn expiry_date(&self, code: &str) -> Result<NaiveDate, HostError>;

    /// One-time account configuration: commissions and margin rate.
    fn apply_setup(&mut self, setup: &AccountSetup);
}

/// When, within the trading day, a registered callback fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    BeforeOpen,
    EveryBar,
    AfterClose,
}

/// Host-side callback registration, referenced against the trading calendar
/// of a specific security.
pub trait Scheduler {
    fn run_daily(&mut self, phase: SessionPhase, reference_code: &str);
}

/// The three entry points the host scheduler invokes each trading day.
///
/// The host decides whether a failed bar halts the session or is logged and
/// skipped.
pub trait TradingCallbacks<H: Host> {
    type Error;

    /// Runs once before market open.
    fn before_open(&mut self, host: &mut H) -> Result<(), Self::Error>;

    /// Runs on every bar during market hours.
    fn on_bar(&mut self, host: &mut H) -> Result<(), Self::Error>;

    /// Runs once after market close.
    fn after_close(&mut self, host: &mut H) -> Result<(), Self::Error>;
}
