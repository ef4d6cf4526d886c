//! The random-entry strategy: wiring for the three daily callbacks.

pub mod config;
pub mod entry;
pub mod rollover;
pub mod sizing;
pub mod state;
pub mod trailing;

pub use config::{AccountSetup, StrategyParams};
pub use state::StrategyState;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::warn;

use crate::host::{Host, HostError, Scheduler, SessionPhase, TradingCallbacks};
use crate::refdata::{self, RefDataError};

/// Strategy-level failures. Host failures pass through; the only failure the
/// strategy itself produces is a reference-data miss during sizing.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    RefData(#[from] RefDataError),
}

/// Single-instrument random-entry strategy.
///
/// Per bar: roll to the current dominant contract, trail the stop for any
/// open position, and when flat flip a coin for direction, size off ATR, and
/// enter at market. Entirely reactive: the host scheduler drives it through
/// [`TradingCallbacks`], one logical thread, no internal scheduling.
#[derive(Debug)]
pub struct RandomEntry {
    params: StrategyParams,
    setup: AccountSetup,
    state: StrategyState,
    rng: StdRng,
}

impl RandomEntry {
    pub fn new(params: StrategyParams) -> Self {
        Self::with_setup(params, AccountSetup::default())
    }

    pub fn with_setup(params: StrategyParams, setup: AccountSetup) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            params,
            setup,
            state: StrategyState::new(),
            rng,
        }
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    pub fn state(&self) -> &StrategyState {
        &self.state
    }

    /// One-time setup: push account configuration to the host and register
    /// the three daily callbacks against the symbol's benchmark security.
    ///
    /// A dominant-code table miss is non-fatal (host convention for lookup
    /// misses): it is logged and the raw symbol is used as the scheduling
    /// reference instead.
    pub fn initialize<H: Host, S: Scheduler>(&mut self, host: &mut H, scheduler: &mut S) {
        host.apply_setup(&self.setup);

        let reference = match refdata::dominant_code(&self.params.symbol) {
            Some(code) => code.to_string(),
            None => {
                warn!(symbol = %self.params.symbol, "no dominant code registered");
                self.params.symbol.clone()
            }
        };

        scheduler.run_daily(SessionPhase::BeforeOpen, &reference);
        scheduler.run_daily(SessionPhase::EveryBar, &reference);
        scheduler.run_daily(SessionPhase::AfterClose, &reference);
    }
}

impl<H: Host> TradingCallbacks<H> for RandomEntry {
    type Error = StrategyError;

    /// Reserved for daily setup logic.
    fn before_open(&mut self, _host: &mut H) -> Result<(), StrategyError> {
        Ok(())
    }

    fn on_bar(&mut self, host: &mut H) -> Result<(), StrategyError> {
        rollover::check_rollover(host, &self.params.symbol, &mut self.state)?;

        if let Some(code) = self.state.dominant.clone() {
            trailing::manage_stop(host, &code, &mut self.state)?;
        }

        // A position that survived the stop check suppresses entries this
        // bar. A stop exit above leaves us flat and eligible to re-enter.
        if !self.state.exposure.is_flat() {
            return Ok(());
        }

        entry::try_enter(host, &self.params, &mut self.state, &mut self.rng)?;
        Ok(())
    }

    /// Reserved for daily teardown logic.
    fn after_close(&mut self, _host: &mut H) -> Result<(), StrategyError> {
        Ok(())
    }
}
