//! Test utilities for pulse-core
//!
//! Builders for entries so analyzer and store tests stay readable.

use chrono::{Duration, NaiveDate};

use crate::models::{DailyEntry, MoodRating, ScreenTimeLevel};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Entry with explicit habits
pub fn entry(
    day: &str,
    mood: u8,
    sleep_hours: f64,
    exercise_minutes: u32,
    screen_time: ScreenTimeLevel,
) -> DailyEntry {
    DailyEntry {
        id: format!("id-{}", day),
        date: date(day),
        mood: MoodRating::new(mood).unwrap(),
        sleep_hours,
        exercise_minutes,
        screen_time,
        note: String::new(),
        timestamp: 0,
    }
}

/// Entry with neutral habits (7h sleep, no exercise, medium screen)
pub fn mood_entry(day: &str, mood: u8) -> DailyEntry {
    entry(day, mood, 7.0, 0, ScreenTimeLevel::Medium)
}

/// Consecutive-day entries starting at `start`, one per mood
pub fn mood_run(start: &str, moods: &[u8]) -> Vec<DailyEntry> {
    let start = date(start);
    moods
        .iter()
        .enumerate()
        .map(|(i, &mood)| {
            let day = (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string();
            mood_entry(&day, mood)
        })
        .collect()
}
