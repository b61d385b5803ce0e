//! Week-over-week mood trend
//!
//! Windows are taken by entry count, not by calendar: the "current week" is
//! the latest 7 entries by date and the "previous week" is the 7 before
//! those. Gaps between dates are not filled.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::DailyEntry;

use super::stats::{mean_mood, percent_change, round_tenths};
use super::types::TrendSummary;

/// Number of entries in one trend window
pub const WINDOW: usize = 7;

fn sorted_ascending(entries: &[DailyEntry]) -> Vec<&DailyEntry> {
    let mut sorted: Vec<&DailyEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
}

/// Mean mood of the latest window and its percent change versus the one before
pub fn compute_trend(entries: &[DailyEntry]) -> TrendSummary {
    if entries.is_empty() {
        return TrendSummary::EMPTY;
    }

    let sorted = sorted_ascending(entries);
    let current_start = sorted.len().saturating_sub(WINDOW);
    let previous_start = current_start.saturating_sub(WINDOW);

    let current_avg = mean_mood(sorted[current_start..].iter().copied());
    let previous_avg = mean_mood(sorted[previous_start..current_start].iter().copied());

    TrendSummary {
        avg: round_tenths(current_avg),
        trend: percent_change(current_avg, previous_avg),
    }
}

/// Latest window of entries, oldest first (the weekly chart series)
pub fn weekly_series(entries: &[DailyEntry]) -> Vec<DailyEntry> {
    let sorted = sorted_ascending(entries);
    let start = sorted.len().saturating_sub(WINDOW);
    sorted[start..].iter().map(|e| (*e).clone()).collect()
}

/// One calendar day in the dashboard's week strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub entry: Option<DailyEntry>,
}

/// The 7 calendar days ending at `today`, oldest first, each with its entry if logged
pub fn recent_days(entries: &[DailyEntry], today: NaiveDate) -> Vec<DayCell> {
    (0..WINDOW as i64)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayCell {
                date,
                entry: entries.iter().find(|e| e.date == date).cloned(),
            }
        })
        .collect()
}
