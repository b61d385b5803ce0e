//! Pulse Core Library
//!
//! Shared functionality for the Pulse mood and habit journal:
//! - Daily entry model and check-in validation
//! - Insight engine (weekly trend, habit pattern detection)
//! - Entry store over pluggable key-value backends, scoped per user
//! - Reversible storage obfuscation codec
//! - Demo journal seeding and dashboard suggestions
//! - Layered configuration

pub mod codec;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod seed;
pub mod store;
pub mod suggestions;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use insights::{Finding, FindingKind, InsightEngine, InsightReport, TrendSummary};
pub use models::{CheckIn, DailyEntry, MoodRating, ScreenTimeLevel};
pub use store::{Encoding, EntryStore, FileStore, KeyValueStore, MemoryStore, Scope};
pub use suggestions::Suggestion;
