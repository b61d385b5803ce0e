//! Insight Engine - runs the pattern detectors and assembles the insights view

use crate::models::DailyEntry;

use super::patterns::{MovementPattern, ScreenTimePattern, SleepPattern, MIN_ENTRIES};
use super::trend::{compute_trend, weekly_series};
use super::types::{Finding, FindingKind, InsightReport};

/// Trait for habit pattern detectors
pub trait PatternDetector: Send + Sync {
    /// Kind of finding this detector emits
    fn kind(&self) -> FindingKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Compare mood across the habit split, returning a finding if it stands out
    fn detect(&self, entries: &[DailyEntry]) -> Option<Finding>;
}

/// The main insight engine
///
/// Never fails: empty or tiny journals produce a zero summary and an empty
/// or fallback finding list.
pub struct InsightEngine {
    detectors: Vec<Box<dyn PatternDetector>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in detectors in evaluation order
    pub fn new() -> Self {
        let mut engine = Self { detectors: vec![] };

        engine.register(Box::new(SleepPattern::new()));
        engine.register(Box::new(ScreenTimePattern::new()));
        engine.register(Box::new(MovementPattern::new()));

        engine
    }

    /// Register a detector; it runs after those already registered
    pub fn register(&mut self, detector: Box<dyn PatternDetector>) {
        self.detectors.push(detector);
    }

    /// Run every detector in order, falling back to "keep logging" when none fire
    ///
    /// Returns nothing at all below `MIN_ENTRIES` entries.
    pub fn detect_patterns(&self, entries: &[DailyEntry]) -> Vec<Finding> {
        if entries.len() < MIN_ENTRIES {
            tracing::debug!(count = entries.len(), "Not enough entries for patterns");
            return vec![];
        }

        let mut findings: Vec<Finding> = self
            .detectors
            .iter()
            .filter_map(|detector| {
                let finding = detector.detect(entries);
                tracing::debug!(
                    detector = detector.name(),
                    found = finding.is_some(),
                    "Pattern detector complete"
                );
                finding
            })
            .collect();

        if findings.is_empty() {
            findings.push(Finding::collection());
        }

        findings
    }

    /// Summary, weekly series, and findings for one journal
    pub fn report(&self, entries: &[DailyEntry]) -> InsightReport {
        InsightReport {
            summary: compute_trend(entries),
            weekly: weekly_series(entries),
            findings: self.detect_patterns(entries),
        }
    }

    /// Kinds of the registered detectors, in evaluation order
    pub fn detector_kinds(&self) -> Vec<FindingKind> {
        self.detectors.iter().map(|d| d.kind()).collect()
    }
}

/// Run the built-in detectors over `entries`
pub fn detect_patterns(entries: &[DailyEntry]) -> Vec<Finding> {
    InsightEngine::new().detect_patterns(entries)
}
