//! Entry decision: coin-flip direction, volatility sizing, initial stop.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::{Side, StopMark};
use crate::host::Host;
use crate::indicators::{ewm_last, rolling_atr};
use crate::strategy::config::StrategyParams;
use crate::strategy::sizing::position_units;
use crate::strategy::state::StrategyState;
use crate::strategy::StrategyError;

/// Attempt to open a new position. Call only while flat.
///
/// Skips silently (returns `Ok(None)`) on expiry day, on empty or too-short
/// history, or when volatility sizes the trade to zero lots. Otherwise flips
/// a fair coin for direction, submits a market order, and — if the host
/// reports a resulting position — arms the initial stop at the fill price
/// minus/plus `ema_times` smoothed ATRs and records the contract as traded.
pub fn try_enter<H: Host>(
    host: &mut H,
    params: &StrategyParams,
    state: &mut StrategyState,
    rng: &mut StdRng,
) -> Result<Option<Side>, StrategyError> {
    let Some(code) = state.dominant.clone() else {
        return Ok(None);
    };

    // No new exposure on the contract's delivery day.
    if host.expiry_date(&code)? == host.today() {
        debug!(%code, "expiry day, entry skipped");
        return Ok(None);
    }

    let bars = host.daily_bars(&code, params.history_len())?;
    let Some(atr_series) = rolling_atr(&bars, params.atr_window, params.ema_window) else {
        debug!(%code, rows = bars.len(), "not enough history, entry skipped");
        return Ok(None);
    };
    let Some(smoothed) = ewm_last(&atr_series, params.ema_window) else {
        return Ok(None);
    };
    let raw_atr = atr_series[atr_series.len() - 1];

    // The signal: one fair coin flip. 1 = long, 0 = short. Deliberately
    // non-predictive; this strategy is a research control.
    let side = if rng.gen_range(0..2) == 1 {
        Side::Long
    } else {
        Side::Short
    };

    let units = position_units(host.total_value(), params.risk_fraction, raw_atr, &params.symbol)?;
    if units == 0 {
        debug!(%code, raw_atr, "sized to zero lots, entry skipped");
        return Ok(None);
    }

    host.submit_order(&code, units, side)?;

    // Fire and forget: no order ids, no partial-fill handling. The position
    // snapshot after submission is the only confirmation.
    let Some(position) = host.position(&code, side) else {
        return Ok(None);
    };
    if !position.is_open() {
        return Ok(None);
    }

    let unit = params.ema_times * smoothed;
    let level = match side {
        Side::Long => position.avg_price - unit,
        Side::Short => position.avg_price + unit,
    };
    state.stop = StopMark::new(level, unit);
    state.exposure = side.into();
    state.last_traded = Some(code.clone());

    info!(
        %code,
        ?side,
        units,
        fill = position.avg_price,
        stop = level,
        "position opened"
    );

    Ok(Some(side))
}
