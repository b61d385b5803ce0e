//! Arithmetic helpers shared by the trend and pattern analyzers
//!
//! All divide-by-zero handling lives here so the policy is in one place:
//! an empty group averages to 0, and a change against a zero baseline is 0%.

use crate::models::DailyEntry;

/// Mean with a denominator floor of 1. An empty input yields 0.
pub fn safe_average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count.max(1) as f64
}

/// Mean mood over a set of entries
pub fn mean_mood<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a DailyEntry>,
{
    safe_average(entries.into_iter().map(|e| f64::from(e.mood.value())))
}

/// Whole-number percent change from `baseline` to `current`, 0 when the
/// baseline is 0
pub fn percent_change(current: f64, baseline: f64) -> i64 {
    if baseline == 0.0 {
        return 0;
    }
    round_half_up((current - baseline) / baseline * 100.0)
}

/// Round to the nearest integer with halves going toward positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Round to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
