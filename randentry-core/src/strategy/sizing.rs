//! Volatility-scaled position sizing.

use crate::refdata::{self, RefDataError};

/// Contracts to trade for one entry.
///
/// `(total_value * risk_fraction / atr) / point_value`, floored to a whole
/// number of lots because the host order interface takes integral units.
/// A non-positive or non-finite ATR sizes to zero (no order) rather than
/// dividing through garbage. An unregistered symbol is a hard error: sizing
/// must never silently miscompute.
pub fn position_units(
    total_value: f64,
    risk_fraction: f64,
    atr: f64,
    symbol: &str,
) -> Result<i64, RefDataError> {
    let point_value = refdata::point_value(symbol)?;

    if !atr.is_finite() || atr <= 0.0 || total_value <= 0.0 {
        return Ok(0);
    }

    let units = (total_value * risk_fraction / atr) / point_value;
    Ok(units.floor().max(0.0) as i64)
}
