//! Volatility indicators used by the entry logic.
//!
//! Two pieces only: windowed-mean ATR over daily bars, and an exponentially
//! weighted mean that smooths the rolling ATR series.

pub mod atr;
pub mod ema;

pub use atr::{atr, rolling_atr, true_range};
pub use ema::ewm_last;

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-9;

#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual}"
    );
}

/// Build synthetic daily bars from (high, low, close) triples for tests.
#[cfg(test)]
pub fn make_hlc_bars(data: &[(f64, f64, f64)]) -> Vec<crate::domain::Bar> {
    use crate::domain::Bar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(high, low, close))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            open: (high + low) / 2.0,
            high,
            low,
            close,
        })
        .collect()
}
