//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::DailyEntry;

/// Kinds of findings the pattern detectors can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// More sleep lines up with better mood
    Sleep,
    /// High screen time lines up with lower mood
    ScreenTime,
    /// Exercise lines up with better mood
    Movement,
    /// Nothing stood out yet; keep logging
    Collection,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Sleep => "sleep",
            FindingKind::ScreenTime => "screen",
            FindingKind::Movement => "exercise",
            FindingKind::Collection => "collection",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FindingKind::Sleep => "Sleep Pattern",
            FindingKind::ScreenTime => "Screen Time",
            FindingKind::Movement => "Movement",
            FindingKind::Collection => "Gathering Data",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FindingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sleep" => Ok(FindingKind::Sleep),
            "screen" => Ok(FindingKind::ScreenTime),
            "exercise" => Ok(FindingKind::Movement),
            "collection" => Ok(FindingKind::Collection),
            _ => Err(format!("Unknown finding kind: {}", s)),
        }
    }
}

/// Whether a finding reads as good news, bad news, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Neutral => "neutral",
            Tone::Negative => "negative",
        }
    }
}

/// A qualitative statement produced by a pattern detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub title: String,
    pub message: String,
    pub tone: Tone,
    /// Percent mood uplift embedded in the message, when the message has one
    pub uplift_percent: Option<i64>,
}

impl Finding {
    pub fn new(kind: FindingKind, tone: Tone, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: message.into(),
            tone,
            uplift_percent: None,
        }
    }

    pub fn with_uplift(mut self, percent: i64) -> Self {
        self.uplift_percent = Some(percent);
        self
    }

    /// The "keep logging" fallback shown when no pattern stands out
    pub fn collection() -> Self {
        Self::new(
            FindingKind::Collection,
            Tone::Neutral,
            "Keep tracking! We're learning what makes your best days happen.",
        )
    }

    pub fn id(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Trailing-week mood average and change versus the week before
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Mean mood of the latest 7 entries, rounded to one decimal
    pub avg: f64,
    /// Whole-number percent change versus the preceding 7 entries
    pub trend: i64,
}

impl TrendSummary {
    pub const EMPTY: TrendSummary = TrendSummary { avg: 0.0, trend: 0 };

    /// Average formatted with one decimal, e.g. "3.0"
    pub fn avg_display(&self) -> String {
        format!("{:.1}", self.avg)
    }
}

/// Everything the insights view renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub summary: TrendSummary,
    /// Latest 7 entries, oldest first
    pub weekly: Vec<DailyEntry>,
    pub findings: Vec<Finding>,
}
