//! Entry storage over a pluggable key-value backend
//!
//! Each scope owns a handful of keys, where `{scope}` is `guest` for the
//! guest and `user_{id}` for a signed-in user:
//! - `pulse_app_data_v1_{scope}` - the whole entry collection as one blob
//! - `pulse_app_seeded_{scope}` - set once demo data has been written
//! - `pulse_onboarding_{scope}` - set once onboarding is finished
//! - `pulse_suggestion_{scope}` - id of the suggestion currently shown
//!
//! Every write rewrites the full blob; there are no partial updates and
//! the last writer wins. A blob that fails to decode is never overwritten.
//!
//! # Architecture
//!
//! - `KeyValueStore` trait defines the get/set interface for backends
//! - `MemoryStore` keeps values in a map (tests, ephemeral sessions)
//! - `FileStore` keeps one file per key in a data directory
//! - `EntryStore` layers the journal operations on top of any backend

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::{Error, Result};
use crate::models::DailyEntry;
use crate::seed;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

const ENTRIES_KEY: &str = "pulse_app_data_v1";
const SEEDED_KEY: &str = "pulse_app_seeded";
const ONBOARDING_KEY: &str = "pulse_onboarding";
const SUGGESTION_KEY: &str = "pulse_suggestion";
const FLAG_SET: &str = "true";

/// Trait for raw key-value storage backends
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name for this backend
    fn name(&self) -> &str;

    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Storage partition for one user or the anonymous guest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Guest,
    User(String),
}

impl Scope {
    /// Resolve the scope for an optional signed-in user id
    pub fn from_user(user_id: Option<&str>) -> Self {
        match user_id.map(str::trim) {
            Some(id) if !id.is_empty() => Scope::User(id.to_string()),
            _ => Scope::Guest,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Scope::Guest)
    }

    fn key(&self, prefix: &str) -> String {
        match self {
            Scope::Guest => format!("{}_guest", prefix),
            Scope::User(id) => format!("{}_user_{}", prefix, id),
        }
    }

    pub fn entries_key(&self) -> String {
        self.key(ENTRIES_KEY)
    }

    pub fn seeded_key(&self) -> String {
        self.key(SEEDED_KEY)
    }

    pub fn onboarding_key(&self) -> String {
        self.key(ONBOARDING_KEY)
    }

    pub fn suggestion_key(&self) -> String {
        self.key(SUGGESTION_KEY)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Guest => write!(f, "guest"),
            Scope::User(id) => write!(f, "user:{}", id),
        }
    }
}

/// How the entry blob is written
///
/// Reads accept either form regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Plain JSON
    Plain,
    /// JSON behind the reversible `codec` obfuscation
    #[default]
    Obfuscated,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Plain => "plain",
            Encoding::Obfuscated => "obfuscated",
        }
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "json" => Ok(Encoding::Plain),
            "obfuscated" | "encoded" => Ok(Encoding::Obfuscated),
            _ => Err(format!("Unknown encoding: {}", s)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Journal operations over a key-value backend
pub struct EntryStore<S: KeyValueStore> {
    backend: S,
    encoding: Encoding,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S, encoding: Encoding) -> Self {
        Self { backend, encoding }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// All entries for a scope, newest first as stored
    ///
    /// A missing, unreadable, or corrupt blob reads as an empty journal.
    pub fn list(&self, scope: &Scope) -> Vec<DailyEntry> {
        match self.load(scope) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                warn!(
                    backend = self.backend.name(),
                    scope = %scope,
                    error = %e,
                    "Failed to load entries, treating as empty"
                );
                vec![]
            }
        }
    }

    /// Insert an entry, or replace the one with the same date
    ///
    /// An incoming entry with an empty id inherits the id of the entry it
    /// replaces. Returns the updated collection, newest first. Fails without
    /// writing if the stored blob cannot be decoded.
    pub fn upsert(&self, mut entry: DailyEntry, scope: &Scope) -> Result<Vec<DailyEntry>> {
        let mut entries = self.load(scope)?.unwrap_or_default();

        match entries.iter().position(|e| e.date == entry.date) {
            Some(index) => {
                if entry.id.is_empty() {
                    entry.id = entries[index].id.clone();
                }
                debug!(date = %entry.date, "Replacing entry");
                entries[index] = entry;
            }
            None => {
                if entry.id.is_empty() {
                    entry.id = DailyEntry::new_id();
                }
                debug!(date = %entry.date, "Adding entry");
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.date.cmp(&a.date));
        self.write_entries(scope, &entries)?;
        Ok(entries)
    }

    /// Entry logged for a given date, if any
    pub fn entry_for(&self, scope: &Scope, date: NaiveDate) -> Option<DailyEntry> {
        self.list(scope).into_iter().find(|e| e.date == date)
    }

    pub fn has_seeded(&self, scope: &Scope) -> bool {
        self.flag(&scope.seeded_key())
    }

    /// Write a demo journal the first time a scope is opened empty
    ///
    /// Does nothing (and returns what is stored) once the scope has been
    /// seeded or if it already has entries.
    pub fn seed_if_empty<R: Rng>(
        &self,
        scope: &Scope,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> Result<Vec<DailyEntry>> {
        if self.has_seeded(scope) {
            return Ok(self.list(scope));
        }

        let existing = self.load(scope)?.unwrap_or_default();
        if !existing.is_empty() {
            return Ok(existing);
        }

        let entries = seed::demo_entries(now, rng);
        self.write_entries(scope, &entries)?;
        self.backend.set(&scope.seeded_key(), FLAG_SET)?;

        info!(scope = %scope, count = entries.len(), "Seeded demo entries");
        Ok(entries)
    }

    pub fn is_onboarded(&self, scope: &Scope) -> bool {
        self.flag(&scope.onboarding_key())
    }

    pub fn complete_onboarding(&self, scope: &Scope) -> Result<()> {
        self.backend.set(&scope.onboarding_key(), FLAG_SET)?;
        info!(scope = %scope, "Onboarding complete");
        Ok(())
    }

    /// Id of the suggestion the scope is currently shown
    pub fn suggestion_id(&self, scope: &Scope) -> Option<String> {
        self.backend
            .get(&scope.suggestion_key())
            .ok()
            .flatten()
            .filter(|id| !id.is_empty())
    }

    pub fn set_suggestion_id(&self, scope: &Scope, id: &str) -> Result<()> {
        self.backend.set(&scope.suggestion_key(), id)
    }

    fn flag(&self, key: &str) -> bool {
        match self.backend.get(key) {
            Ok(value) => value.as_deref() == Some(FLAG_SET),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read flag");
                false
            }
        }
    }

    /// Stored entries, `None` when nothing has been written yet
    ///
    /// Unlike `list`, a blob that cannot be read or decoded is an error so
    /// writers never replace data they could not parse.
    fn load(&self, scope: &Scope) -> Result<Option<Vec<DailyEntry>>> {
        let key = scope.entries_key();
        let Some(stored) = self.backend.get(&key)? else {
            return Ok(None);
        };

        codec::decode(&stored).map_err(|e| {
            Error::Storage(format!(
                "Stored entries under {} could not be decoded ({}); refusing to overwrite them",
                key, e
            ))
        })
    }

    fn write_entries(&self, scope: &Scope, entries: &[DailyEntry]) -> Result<()> {
        let value = match self.encoding {
            Encoding::Plain => serde_json::to_string(entries)?,
            Encoding::Obfuscated => codec::encode(entries)?,
        };
        self.backend.set(&scope.entries_key(), &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MoodRating, ScreenTimeLevel};
    use crate::test_utils::{date, entry, mood_entry};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> EntryStore<MemoryStore> {
        EntryStore::new(MemoryStore::new(), Encoding::Obfuscated)
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_scope_keys() {
        assert_eq!(Scope::Guest.entries_key(), "pulse_app_data_v1_guest");
        assert_eq!(
            Scope::User("2abc".to_string()).seeded_key(),
            "pulse_app_seeded_user_2abc"
        );
        assert_eq!(Scope::from_user(Some("  ")), Scope::Guest);
        assert_eq!(Scope::from_user(None), Scope::Guest);
        assert_eq!(
            Scope::from_user(Some("u1")),
            Scope::User("u1".to_string())
        );
    }

    #[test]
    fn test_empty_scope_lists_nothing() {
        assert!(store().list(&Scope::Guest).is_empty());
    }

    #[test]
    fn test_upsert_same_date_replaces() {
        let store = store();
        let scope = Scope::Guest;

        store.upsert(mood_entry("2026-03-10", 2), &scope).unwrap();
        let mut second = mood_entry("2026-03-10", 5);
        second.id = "other-id".to_string();
        let entries = store.upsert(second, &scope).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood.value(), 5);
        assert_eq!(entries[0].id, "other-id");
        assert_eq!(store.list(&scope), entries);
    }

    #[test]
    fn test_upsert_keeps_existing_id_when_blank() {
        let store = store();
        let scope = Scope::Guest;

        store.upsert(mood_entry("2026-03-10", 2), &scope).unwrap();
        let mut edit = mood_entry("2026-03-10", 4);
        edit.id = String::new();
        let entries = store.upsert(edit, &scope).unwrap();

        assert_eq!(entries[0].id, "id-2026-03-10");
    }

    #[test]
    fn test_upsert_sorts_newest_first() {
        let store = store();
        let scope = Scope::Guest;

        store.upsert(mood_entry("2026-03-10", 3), &scope).unwrap();
        store.upsert(mood_entry("2026-03-12", 3), &scope).unwrap();
        let entries = store.upsert(mood_entry("2026-03-11", 3), &scope).unwrap();

        let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2026-03-12"), date("2026-03-11"), date("2026-03-10")]
        );
    }

    #[test]
    fn test_scopes_are_isolated() {
        let store = store();
        let alice = Scope::User("alice".to_string());

        store.upsert(mood_entry("2026-03-10", 3), &alice).unwrap();
        assert_eq!(store.list(&alice).len(), 1);
        assert!(store.list(&Scope::Guest).is_empty());
    }

    #[test]
    fn test_user_named_guest_is_not_the_guest() {
        let store = store();
        let named_guest = Scope::User("guest".to_string());

        store.upsert(mood_entry("2026-03-10", 3), &Scope::Guest).unwrap();
        assert_ne!(named_guest.entries_key(), Scope::Guest.entries_key());
        assert!(store.list(&named_guest).is_empty());

        store.complete_onboarding(&Scope::Guest).unwrap();
        assert!(!store.is_onboarded(&named_guest));
    }

    #[test]
    fn test_encoding_on_disk() {
        let scope = Scope::Guest;

        let obfuscated = store();
        obfuscated.upsert(mood_entry("2026-03-10", 3), &scope).unwrap();
        let raw = obfuscated.backend().get(&scope.entries_key()).unwrap().unwrap();
        assert!(codec::is_encoded(&raw));

        let plain = EntryStore::new(MemoryStore::new(), Encoding::Plain);
        plain.upsert(mood_entry("2026-03-10", 3), &scope).unwrap();
        let raw = plain.backend().get(&scope.entries_key()).unwrap().unwrap();
        assert!(raw.starts_with('['));
    }

    #[test]
    fn test_reads_legacy_plain_blob() {
        let backend = MemoryStore::new();
        let legacy = vec![entry("2026-03-01", 4, 8.0, 30, ScreenTimeLevel::Low)];
        backend
            .set(
                &Scope::Guest.entries_key(),
                &serde_json::to_string(&legacy).unwrap(),
            )
            .unwrap();

        let store = EntryStore::new(backend, Encoding::Obfuscated);
        assert_eq!(store.list(&Scope::Guest), legacy);
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let backend = MemoryStore::new();
        backend
            .set(&Scope::Guest.entries_key(), "enc_v1_%%%garbage")
            .unwrap();

        let store = EntryStore::new(backend, Encoding::Obfuscated);
        assert!(store.list(&Scope::Guest).is_empty());
    }

    fn journal_with_bad_record() -> (EntryStore<MemoryStore>, String) {
        let backend = MemoryStore::new();
        let days: Vec<DailyEntry> = (1..=9)
            .map(|d| mood_entry(&format!("2026-03-0{}", d), 3))
            .collect();
        let mut records = serde_json::to_value(&days).unwrap();
        // Fractional minutes do not fit the entry model
        records.as_array_mut().unwrap().push(serde_json::json!({
            "id": "bad", "date": "2026-03-10", "mood": 4, "sleepHours": 7.0,
            "exerciseMinutes": 12.5, "screenTime": "Low", "note": "", "timestamp": 0
        }));
        let raw = codec::encode(&records).unwrap();
        backend.set(&Scope::Guest.entries_key(), &raw).unwrap();
        (EntryStore::new(backend, Encoding::Obfuscated), raw)
    }

    #[test]
    fn test_upsert_refuses_to_overwrite_undecodable_blob() {
        let (store, raw) = journal_with_bad_record();
        let scope = Scope::Guest;

        assert!(store.list(&scope).is_empty());
        let result = store.upsert(mood_entry("2026-03-11", 5), &scope);
        assert!(matches!(result, Err(Error::Storage(_))));

        let after = store.backend().get(&scope.entries_key()).unwrap();
        assert_eq!(after.as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn test_seed_refuses_to_overwrite_undecodable_blob() {
        let (store, raw) = journal_with_bad_record();
        let scope = Scope::Guest;

        let result = store.seed_if_empty(&scope, now(), &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(!store.has_seeded(&scope));

        let after = store.backend().get(&scope.entries_key()).unwrap();
        assert_eq!(after.as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn test_entry_for_date() {
        let store = store();
        let scope = Scope::Guest;
        store.upsert(mood_entry("2026-03-10", 4), &scope).unwrap();

        let found = store.entry_for(&scope, date("2026-03-10")).unwrap();
        assert_eq!(found.mood, MoodRating::new(4).unwrap());
        assert!(store.entry_for(&scope, date("2026-03-11")).is_none());
    }

    #[test]
    fn test_seed_if_empty_is_idempotent() {
        let store = store();
        let scope = Scope::Guest;
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!store.has_seeded(&scope));
        let first = store.seed_if_empty(&scope, now(), &mut rng).unwrap();
        assert_eq!(first.len(), 10);
        assert!(store.has_seeded(&scope));

        let second = store.seed_if_empty(&scope, now(), &mut rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_skips_scope_with_data() {
        let store = store();
        let scope = Scope::Guest;
        store.upsert(mood_entry("2026-03-10", 4), &scope).unwrap();

        let entries = store
            .seed_if_empty(&scope, now(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!store.has_seeded(&scope));
    }

    #[test]
    fn test_onboarding_flag() {
        let store = store();
        let scope = Scope::User("bob".to_string());

        assert!(!store.is_onboarded(&scope));
        store.complete_onboarding(&scope).unwrap();
        assert!(store.is_onboarded(&scope));
        assert!(!store.is_onboarded(&Scope::Guest));
    }

    #[test]
    fn test_suggestion_id() {
        let store = store();
        assert_eq!(store.suggestion_id(&Scope::Guest), None);
        store.set_suggestion_id(&Scope::Guest, "3").unwrap();
        assert_eq!(store.suggestion_id(&Scope::Guest).as_deref(), Some("3"));
    }
}
