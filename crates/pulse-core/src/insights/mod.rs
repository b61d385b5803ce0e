//! Insight Engine - mood trends and habit patterns
//!
//! Turns a journal of daily entries into what the insights view shows:
//!
//! - **Trend** - mean mood of the latest 7 entries and its percent change
//!   versus the 7 before
//! - **Weekly series** - the latest 7 entries for charting
//! - **Patterns** - short statements comparing mood across a habit split
//!   (sleep, screen time, movement), with a "keep logging" fallback
//!
//! Everything here is a pure function of the entries and never errors.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_core::insights::InsightEngine;
//!
//! let report = InsightEngine::new().report(&entries);
//! println!("{}/5 ({:+}%)", report.summary.avg_display(), report.summary.trend);
//! ```

pub mod engine;
pub mod patterns;
pub mod stats;
pub mod trend;
pub mod types;

pub use engine::{detect_patterns, InsightEngine, PatternDetector};
pub use patterns::{MovementPattern, ScreenTimePattern, SleepPattern, MIN_ENTRIES};
pub use stats::safe_average;
pub use trend::{compute_trend, recent_days, weekly_series, DayCell};
pub use types::{Finding, FindingKind, InsightReport, Tone, TrendSummary};
