//! Trailing stop maintenance and breach exits.

use tracing::info;

use crate::domain::Side;
use crate::host::{Host, HostError};
use crate::strategy::state::StrategyState;

/// Trail the stop off the latest completed bar close, then exit on a breach.
///
/// The stop only ever tightens: up for longs, down for shorts, even when the
/// close moves against the position. A breach of the stop by the latest trade
/// price closes the whole position at market and flattens the exposure; the
/// stop mark itself is left behind and is overwritten by the next entry.
///
/// Returns `true` if the position was closed this bar. No-op while flat.
pub fn manage_stop<H: Host>(
    host: &mut H,
    code: &str,
    state: &mut StrategyState,
) -> Result<bool, HostError> {
    let Some(side) = state.exposure.side() else {
        return Ok(false);
    };

    let close = host.last_bar_close(code)?;
    let last = host.last_price(code)?;

    let breached = match side {
        Side::Long => {
            let stop = state.stop.ratchet_up(close - state.stop.unit);
            last < stop
        }
        Side::Short => {
            let stop = state.stop.ratchet_down(close + state.stop.unit);
            last > stop
        }
    };

    if breached {
        host.close_position(code, side)?;
        info!(
            %code,
            ?side,
            last_price = last,
            stop = state.stop.level,
            "stop breached, position closed"
        );
        state.exposure = crate::domain::Exposure::Flat;
    }

    Ok(breached)
}
