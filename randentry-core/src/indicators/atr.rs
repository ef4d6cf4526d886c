//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |prev_close-low|).
//! ATR here is the arithmetic mean of True Range over the window (not Wilder
//! smoothing). A window of length `n` consumes `n + 1` bars: every TR term
//! needs the previous close.

use crate::domain::Bar;

/// True Range for a single bar given the previous bar's close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((prev_close - low).abs())
}

/// ATR over the trailing `window` true ranges of `bars`.
///
/// Uses the last `window + 1` bars; returns `None` when fewer are available.
pub fn atr(bars: &[Bar], window: usize) -> Option<f64> {
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let recent = &bars[bars.len() - (window + 1)..];
    let sum: f64 = recent
        .windows(2)
        .map(|pair| true_range(pair[1].high, pair[1].low, pair[0].close))
        .sum();

    Some(sum / window as f64)
}

/// ATR over each of `count` consecutive overlapping sub-windows.
///
/// Sub-window `i` covers `bars[i ..= i + window]`, so `window + count` bars
/// are required in total. Returns `None` when the history is too short;
/// otherwise the series is oldest-first with the freshest ATR last.
pub fn rolling_atr(bars: &[Bar], window: usize, count: usize) -> Option<Vec<f64>> {
    if count == 0 || bars.len() < window + count {
        return None;
    }

    let mut series = Vec::with_capacity(count);
    for i in 0..count {
        series.push(atr(&bars[i..=i + window], window)?);
    }
    Some(series)
}
