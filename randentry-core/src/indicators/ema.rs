//! Exponentially weighted mean over a pre-extracted f64 series.
//!
//! Span semantics: alpha = 2 / (span + 1). Weights are normalized over the
//! observations actually seen ("adjusted" form), so short series still get a
//! genuine exponential weighting instead of an SMA seed.

/// Exponentially weighted mean series. `result[t]` weights `values[..=t]`
/// with `(1 - alpha)^k` for the observation `k` steps back.
///
/// Returns an empty vector for an empty input or `span == 0`. A NaN anywhere
/// in the input poisons every value from that index on.
pub fn ewm(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() || span == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut result = Vec::with_capacity(values.len());
    // Running numerator and weight sum; each step decays both and adds the
    // new observation with weight 1.
    let mut num = 0.0;
    let mut den = 0.0;
    for &v in values {
        num = num * decay + v;
        den = den * decay + 1.0;
        result.push(num / den);
    }
    result
}

/// Last value of the exponentially weighted mean: the smoothed estimate the
/// entry logic consumes. `None` for an empty series, `span == 0`, or a NaN
/// tail.
pub fn ewm_last(values: &[f64], span: usize) -> Option<f64> {
    ewm(values, span).last().copied().filter(|v| !v.is_nan())
}
