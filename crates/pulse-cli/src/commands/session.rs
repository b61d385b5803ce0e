//! Session setup shared by every command
//!
//! The scope is resolved once here and passed to every store call.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pulse_core::{Config, Encoding, EntryStore, FileStore, Scope};

/// Everything a command needs: resolved config, scope, and the store
pub struct Session {
    pub config: Config,
    pub scope: Scope,
    pub store: EntryStore<FileStore>,
}

/// Load config, resolve the scope, and open the file-backed store
pub fn open_session(data_dir: Option<&Path>, user: Option<&str>, plain: bool) -> Result<Session> {
    let mut config = Config::load(data_dir).context("Failed to load configuration")?;
    if plain {
        config.encoding = Encoding::Plain;
    }
    session_from_config(config, user)
}

/// Open a session for an already-resolved config
pub fn session_from_config(config: Config, user: Option<&str>) -> Result<Session> {
    let scope = Scope::from_user(user);
    if !scope.is_guest() && !config.has_auth() {
        tracing::warn!(
            scope = %scope,
            "No authentication provider key configured; user scope is not verified"
        );
    }

    let backend = FileStore::new(&config.data_dir).with_context(|| {
        format!("Failed to open data directory {}", config.data_dir.display())
    })?;
    let store = EntryStore::new(backend, config.encoding);

    tracing::debug!(scope = %scope, encoding = %config.encoding, "Session opened");
    Ok(Session {
        config,
        scope,
        store,
    })
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", s))
}

/// Print a one-line nudge when onboarding hasn't been finished
pub fn onboarding_hint(session: &Session) {
    if !session.store.is_onboarded(&session.scope) {
        println!("   👋 New here? Run 'pulse onboarding' for a quick tour.");
    }
}
