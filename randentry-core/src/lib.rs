//! Random-entry futures strategy core.
//!
//! A single-instrument strategy plugin driven by a host backtesting/live
//! platform through three daily callbacks (before open, every bar, after
//! close). Once per bar it:
//! - rolls to the current dominant contract, force-closing any position held
//!   on the old one,
//! - trails an ATR-unit stop for an open position and exits on a breach,
//! - and, when flat, flips a coin for direction, sizes the trade off
//!   volatility, and enters at market.
//!
//! The host platform (market data, order routing, portfolio state, reference
//! data, scheduling) is injected behind the [`host::Host`] and
//! [`host::Scheduler`] traits so the strategy runs against a mock in tests.

pub mod domain;
pub mod host;
pub mod indicators;
pub mod refdata;
pub mod strategy;

pub use host::{Host, HostError, Scheduler, SessionPhase, TradingCallbacks};
pub use strategy::{AccountSetup, RandomEntry, StrategyError, StrategyParams};
