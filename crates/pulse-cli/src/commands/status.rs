//! Status, seeding, onboarding, and suggestion commands

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use pulse_core::config::AUTH_KEY_ENV;
use pulse_core::{KeyValueStore, Suggestion};

use super::Session;

pub fn cmd_status(session: &Session) -> Result<()> {
    let store = &session.store;
    let scope = &session.scope;

    println!();
    println!("📊 Pulse Status");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Data dir: {}", session.config.data_dir.display());
    println!("   Backend:  {}", store.backend().name());
    println!("   Scope:    {}", scope);

    if store.encoding() == pulse_core::Encoding::Obfuscated {
        println!("   🙈 Storage: obfuscated (not encryption)");
    } else {
        println!("   📄 Storage: plain JSON");
    }

    if session.config.has_auth() {
        println!("   🔑 Auth provider: configured");
    } else {
        println!("   👤 Auth provider: not configured (set {})", AUTH_KEY_ENV);
    }

    let entries = store.list(scope);
    println!();
    println!("   Entries:    {}", entries.len());
    if let (Some(newest), Some(oldest)) = (entries.first(), entries.last()) {
        println!("   Range:      {} → {}", oldest.date, newest.date);
    }
    println!("   Seeded:     {}", yes_no(store.has_seeded(scope)));
    println!("   Onboarded:  {}", yes_no(store.is_onboarded(scope)));
    println!();

    Ok(())
}

pub fn cmd_seed(session: &Session, now: DateTime<Local>) -> Result<()> {
    let already_seeded = session.store.has_seeded(&session.scope);
    let entries = session
        .store
        .seed_if_empty(&session.scope, now, &mut rand::rng())
        .context("Failed to seed demo data")?;

    if already_seeded {
        println!("Demo data was already added for {}.", session.scope);
    } else if session.store.has_seeded(&session.scope) {
        println!("🌱 Added {} days of demo data.", entries.len());
        println!("   Try: pulse insights");
    } else {
        println!(
            "Journal already has {} entries; demo data not added.",
            entries.len()
        );
    }

    Ok(())
}

const ONBOARDING_STEPS: &[(&str, &str)] = &[
    (
        "Check in daily",
        "Rate your mood and note sleep, movement, and screen time. It takes a minute.",
    ),
    (
        "Spot your patterns",
        "After a few days, Pulse compares your mood across habits.",
    ),
    (
        "Private by default",
        "Your journal stays on this device.",
    ),
];

pub fn cmd_onboarding(session: &Session, complete: bool) -> Result<()> {
    if complete {
        session
            .store
            .complete_onboarding(&session.scope)
            .context("Failed to save onboarding status")?;
        println!("✅ You're all set. Log today with: pulse checkin");
        return Ok(());
    }

    println!();
    for (i, (title, body)) in ONBOARDING_STEPS.iter().enumerate() {
        println!("   {}. {}", i + 1, title);
        println!("      {}", body);
    }
    println!();

    if session.store.is_onboarded(&session.scope) {
        println!("   Onboarding complete.");
    } else {
        println!("   Finish with: pulse onboarding --complete");
    }

    Ok(())
}

pub fn cmd_suggestion(session: &Session, next: bool) -> Result<()> {
    let current = session
        .store
        .suggestion_id(&session.scope)
        .unwrap_or_else(|| Suggestion::initial().id.to_string());

    let suggestion = if next {
        let next = Suggestion::next_after(&current);
        session
            .store
            .set_suggestion_id(&session.scope, next.id)
            .context("Failed to save suggestion")?;
        next
    } else {
        Suggestion::find(&current)
    };

    println!("💡 {} ({})", suggestion.text, suggestion.category.as_str());
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
