//! Demo journal for first-run scopes
//!
//! Generates ten days ending today with mood loosely driven by the habits:
//! more sleep and any exercise push mood up, heavy screen time pulls it
//! down, plus a little noise. Enough for the insights view to show patterns
//! straight away.

use chrono::{DateTime, Duration, Local};
use rand::Rng;

use crate::models::{DailyEntry, MoodRating, ScreenTimeLevel};

/// Number of demo days generated
pub const DEMO_DAYS: i64 = 10;

const DAY_MS: i64 = 86_400_000;

/// Generate demo entries, newest first
pub fn demo_entries<R: Rng>(now: DateTime<Local>, rng: &mut R) -> Vec<DailyEntry> {
    let today = now.date_naive();

    (0..DEMO_DAYS)
        .map(|i| {
            let sleep_hours = f64::from(rng.random_range(5u8..=8));
            let exercise_minutes = if rng.random_bool(0.6) { 30 } else { 0 };
            let screen_time = if rng.random_bool(0.5) {
                ScreenTimeLevel::High
            } else {
                ScreenTimeLevel::Low
            };

            let mut mood: i32 = 3;
            if sleep_hours >= 7.0 {
                mood += 1;
            }
            if exercise_minutes > 0 {
                mood += 1;
            }
            if screen_time == ScreenTimeLevel::High {
                mood -= 1;
            }
            if rng.random_bool(0.2) {
                mood -= 1;
            }

            DailyEntry {
                id: DailyEntry::new_id(),
                date: today - Duration::days(i),
                mood: MoodRating::saturating(mood),
                sleep_hours,
                exercise_minutes,
                screen_time,
                note: if i == 0 {
                    "Feeling okay, just a bit tired.".to_string()
                } else {
                    String::new()
                },
                timestamp: now.timestamp_millis() - i * DAY_MS,
            }
        })
        .collect()
}
