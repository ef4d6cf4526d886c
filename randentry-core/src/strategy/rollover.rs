//! Dominant-contract rollover handling.

use tracing::info;

use crate::host::{Host, HostError};
use crate::strategy::state::StrategyState;

/// Fetch the dominant contract and liquidate if it changed.
///
/// On the first bar the fetched contract is simply adopted. On a change, any
/// open position on the old contract is closed at market regardless of
/// profitability (no roll-forward), the state is reset to neutral, and the
/// new contract becomes the last-traded one. A re-entry happens later via the
/// usual coin flip. No-op while the dominant contract is stable.
pub fn check_rollover<H: Host>(
    host: &mut H,
    symbol: &str,
    state: &mut StrategyState,
) -> Result<(), HostError> {
    let dominant = host.dominant_contract(symbol)?;
    state.dominant = Some(dominant.clone());

    let Some(last) = state.last_traded.clone() else {
        state.last_traded = Some(dominant);
        return Ok(());
    };

    if last != dominant {
        if let Some(side) = state.exposure.side() {
            host.close_position(&last, side)?;
        }
        info!(old = %last, new = %dominant, "dominant contract changed, closing out");
        state.reset_position();
        state.last_traded = Some(dominant);
    }

    Ok(())
}
