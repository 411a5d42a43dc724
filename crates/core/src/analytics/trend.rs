//! Shared arithmetic helpers for trend and rounding

/// Fractional change between two window totals
///
/// Returns 0.0 when the previous total is zero. This is the single trend
/// convention used across the aggregation layer; a 0 → positive transition
/// reads as "no prior baseline", not as +100%.
pub fn trend(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (current - previous) / previous
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
