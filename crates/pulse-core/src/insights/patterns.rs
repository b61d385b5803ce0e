//! Habit pattern detectors
//!
//! Each detector splits the entries in two by one habit and compares mean
//! mood between the halves. An empty half averages to 0 (see `stats`), which
//! is a deliberate simplification for small journals.

use crate::models::{DailyEntry, ScreenTimeLevel};

use super::engine::PatternDetector;
use super::stats::{mean_mood, percent_change};
use super::types::{Finding, FindingKind, Tone};

/// Fewest entries needed before any pattern is reported
pub const MIN_ENTRIES: usize = 3;

/// Mean mood of the entries matching `pred` and of the rest
fn split_means(entries: &[DailyEntry], pred: impl Fn(&DailyEntry) -> bool) -> (f64, f64) {
    let (matching, rest): (Vec<&DailyEntry>, Vec<&DailyEntry>) =
        entries.iter().partition(|e| pred(e));
    (mean_mood(matching), mean_mood(rest))
}

/// Better mood on well-rested days
pub struct SleepPattern {
    /// Hours at or above which a night counts as well-rested
    threshold_hours: f64,
    /// How much higher the rested mean must be
    margin: f64,
}

impl SleepPattern {
    pub fn new() -> Self {
        Self {
            threshold_hours: 7.0,
            margin: 0.3,
        }
    }
}

impl Default for SleepPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDetector for SleepPattern {
    fn kind(&self) -> FindingKind {
        FindingKind::Sleep
    }

    fn name(&self) -> &'static str {
        "Sleep"
    }

    fn detect(&self, entries: &[DailyEntry]) -> Option<Finding> {
        let (rested, short) = split_means(entries, |e| e.sleep_hours >= self.threshold_hours);
        tracing::debug!(rested, short, "Sleep split");

        if rested <= short + self.margin {
            return None;
        }

        // No short-sleep days logged: there is no baseline to quote a percentage against
        if short == 0.0 {
            return Some(Finding::new(
                FindingKind::Sleep,
                Tone::Positive,
                format!(
                    "You tend to feel better on days you sleep more than {} hours.",
                    self.threshold_hours
                ),
            ));
        }

        let uplift = percent_change(rested, short);
        Some(
            Finding::new(
                FindingKind::Sleep,
                Tone::Positive,
                format!(
                    "You tend to feel {}% better on days you sleep more than {} hours.",
                    uplift, self.threshold_hours
                ),
            )
            .with_uplift(uplift),
        )
    }
}

/// Lower mood on heavy screen days
pub struct ScreenTimePattern {
    margin: f64,
}

impl ScreenTimePattern {
    pub fn new() -> Self {
        Self { margin: 0.3 }
    }
}

impl Default for ScreenTimePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDetector for ScreenTimePattern {
    fn kind(&self) -> FindingKind {
        FindingKind::ScreenTime
    }

    fn name(&self) -> &'static str {
        "Screen Time"
    }

    fn detect(&self, entries: &[DailyEntry]) -> Option<Finding> {
        let (high, low) = split_means(entries, |e| e.screen_time == ScreenTimeLevel::High);
        tracing::debug!(high, low, "Screen time split");

        if high >= low - self.margin {
            return None;
        }

        Some(Finding::new(
            FindingKind::ScreenTime,
            Tone::Negative,
            "Low mood days often follow high screen time evenings.",
        ))
    }
}

/// Better mood on days with any exercise
pub struct MovementPattern {
    margin: f64,
}

impl MovementPattern {
    pub fn new() -> Self {
        Self { margin: 0.2 }
    }
}

impl Default for MovementPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDetector for MovementPattern {
    fn kind(&self) -> FindingKind {
        FindingKind::Movement
    }

    fn name(&self) -> &'static str {
        "Movement"
    }

    fn detect(&self, entries: &[DailyEntry]) -> Option<Finding> {
        let (active, rest) = split_means(entries, DailyEntry::exercised);
        tracing::debug!(active, rest, "Movement split");

        if active <= rest + self.margin {
            return None;
        }

        Some(Finding::new(
            FindingKind::Movement,
            Tone::Positive,
            "Moving your body correlates with a boost in your daily mood.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScreenTimeLevel::{High, Low, Medium};
    use crate::test_utils::entry;

    #[test]
    fn test_sleep_uplift_message() {
        let entries = vec![
            entry("2026-03-01", 5, 8.0, 0, Medium),
            entry("2026-03-02", 2, 5.0, 0, Medium),
            entry("2026-03-03", 5, 7.0, 0, Medium),
            entry("2026-03-04", 2, 6.5, 0, Medium),
        ];

        let finding = SleepPattern::new().detect(&entries).unwrap();
        assert_eq!(finding.uplift_percent, Some(150));
        assert_eq!(
            finding.message,
            "You tend to feel 150% better on days you sleep more than 7 hours."
        );
    }

    #[test]
    fn test_sleep_margin_is_strict() {
        // Equal means never clear the margin
        let entries = vec![
            entry("2026-03-01", 3, 8.0, 0, Medium),
            entry("2026-03-02", 3, 5.0, 0, Medium),
            entry("2026-03-03", 3, 9.0, 0, Medium),
        ];
        assert!(SleepPattern::new().detect(&entries).is_none());
    }

    #[test]
    fn test_screen_time_counts_medium_as_low() {
        let entries = vec![
            entry("2026-03-01", 2, 7.0, 0, High),
            entry("2026-03-02", 4, 7.0, 0, Medium),
            entry("2026-03-03", 4, 7.0, 0, Low),
        ];

        let finding = ScreenTimePattern::new().detect(&entries).unwrap();
        assert_eq!(finding.kind, FindingKind::ScreenTime);
        assert_eq!(finding.tone, Tone::Negative);
        assert!(finding.uplift_percent.is_none());
    }

    #[test]
    fn test_screen_time_needs_lower_mood() {
        let entries = vec![
            entry("2026-03-01", 4, 7.0, 0, High),
            entry("2026-03-02", 4, 7.0, 0, Low),
            entry("2026-03-03", 3, 7.0, 0, Low),
        ];
        assert!(ScreenTimePattern::new().detect(&entries).is_none());
    }

    #[test]
    fn test_movement_threshold() {
        let entries = vec![
            entry("2026-03-01", 4, 7.0, 30, Low),
            entry("2026-03-02", 3, 7.0, 0, Low),
            entry("2026-03-03", 4, 7.0, 60, Low),
        ];
        assert!(MovementPattern::new().detect(&entries).is_some());

        let flat = vec![
            entry("2026-03-01", 3, 7.0, 30, Low),
            entry("2026-03-02", 3, 7.0, 0, Low),
            entry("2026-03-03", 3, 7.0, 60, Low),
        ];
        assert!(MovementPattern::new().detect(&flat).is_none());
    }

    #[test]
    fn test_empty_group_averages_to_zero() {
        // Nobody exercised: active mean is 0, so no movement finding
        let entries = vec![
            entry("2026-03-01", 5, 7.0, 0, Low),
            entry("2026-03-02", 5, 7.0, 0, Low),
            entry("2026-03-03", 5, 7.0, 0, Low),
        ];
        assert!(MovementPattern::new().detect(&entries).is_none());

        // Everyone slept well: short mean is 0, finding fires without a percentage
        let finding = SleepPattern::new().detect(&entries).unwrap();
        assert_eq!(finding.uplift_percent, None);
        assert_eq!(
            finding.message,
            "You tend to feel better on days you sleep more than 7 hours."
        );
    }
}
