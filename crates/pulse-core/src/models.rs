//! Domain models for Pulse

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum note length accepted by the check-in editor
pub const MAX_NOTE_CHARS: usize = 140;

/// Sleep hours pre-filled for a new check-in
pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;

/// A mood rating from 1 (rough) to 5 (great)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodRating(u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidData(format!(
                "Mood must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    /// Clamp any integer into the valid range
    pub fn saturating(value: i32) -> Self {
        Self(value.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Rough",
            2 => "Low",
            3 => "Okay",
            4 => "Good",
            _ => "Great",
        }
    }
}

impl TryFrom<u8> for MoodRating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MoodRating> for u8 {
    fn from(mood: MoodRating) -> Self {
        mood.0
    }
}

impl std::fmt::Display for MoodRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Self-reported screen time band for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenTimeLevel {
    Low,
    Medium,
    High,
}

impl ScreenTimeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Hours band shown next to the option in the editor
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Low => "< 2h",
            Self::Medium => "2-4h",
            Self::High => "4h+",
        }
    }

    pub fn all() -> &'static [ScreenTimeLevel] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

impl std::str::FromStr for ScreenTimeLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown screen time level: {}", s)),
        }
    }
}

impl std::fmt::Display for ScreenTimeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged day. `date` is the natural key within a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: MoodRating,
    pub sleep_hours: f64,
    pub exercise_minutes: u32,
    pub screen_time: ScreenTimeLevel,
    #[serde(default)]
    pub note: String,
    /// Creation or last-modification instant, epoch milliseconds
    pub timestamp: i64,
}

impl DailyEntry {
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn exercised(&self) -> bool {
        self.exercise_minutes > 0
    }

    /// Last-modified time in the local timezone, if the timestamp is representable
    pub fn modified_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.timestamp).single()
    }
}

/// Draft produced by the check-in editor before validation
///
/// Mood and screen time start unset; the entry cannot be saved until both
/// are chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    /// Id of the entry being edited, if any
    pub id: Option<String>,
    /// Day being logged (defaults to today)
    pub date: Option<NaiveDate>,
    pub mood: Option<MoodRating>,
    pub sleep_hours: f64,
    pub exercise_minutes: u32,
    pub screen_time: Option<ScreenTimeLevel>,
    pub note: String,
}

impl Default for CheckIn {
    fn default() -> Self {
        Self {
            id: None,
            date: None,
            mood: None,
            sleep_hours: DEFAULT_SLEEP_HOURS,
            exercise_minutes: 0,
            screen_time: None,
            note: String::new(),
        }
    }
}

impl CheckIn {
    /// Pre-fill a draft from an existing entry so re-submitting replaces it
    pub fn from_entry(entry: &DailyEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            date: Some(entry.date),
            mood: Some(entry.mood),
            sleep_hours: entry.sleep_hours,
            exercise_minutes: entry.exercise_minutes,
            screen_time: Some(entry.screen_time),
            note: entry.note.clone(),
        }
    }

    /// Whether the required fields are set (the submit button's enabled state)
    pub fn is_complete(&self) -> bool {
        self.mood.is_some() && self.screen_time.is_some()
    }

    /// Validate the draft and produce an entry stamped with `now`
    pub fn into_entry(self, now: DateTime<Local>) -> Result<DailyEntry> {
        let mood = self.mood.ok_or(Error::MissingField("mood"))?;
        let screen_time = self.screen_time.ok_or(Error::MissingField("screen_time"))?;

        if !self.sleep_hours.is_finite() || self.sleep_hours < 0.0 {
            return Err(Error::InvalidData(format!(
                "Sleep hours must be a non-negative number, got {}",
                self.sleep_hours
            )));
        }

        let note_len = self.note.chars().count();
        if note_len > MAX_NOTE_CHARS {
            return Err(Error::InvalidData(format!(
                "Note is {} characters, limit is {}",
                note_len, MAX_NOTE_CHARS
            )));
        }

        Ok(DailyEntry {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(DailyEntry::new_id),
            date: self.date.unwrap_or_else(|| now.date_naive()),
            mood,
            sleep_hours: self.sleep_hours,
            exercise_minutes: self.exercise_minutes,
            screen_time,
            note: self.note,
            timestamp: now.timestamp_millis(),
        })
    }
}
