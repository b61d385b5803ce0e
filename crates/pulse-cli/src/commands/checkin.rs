//! Check-in, dashboard, and entry list commands

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use pulse_core::insights::recent_days;
use pulse_core::{CheckIn, DailyEntry, MoodRating, ScreenTimeLevel, Suggestion};

use super::{mood_dots, onboarding_hint, parse_date, truncate, Session};

/// Fields supplied on the command line; anything unset keeps the existing value
#[derive(Debug, Default)]
pub struct CheckInArgs {
    pub mood: Option<u8>,
    pub screen: Option<String>,
    pub sleep: Option<f64>,
    pub exercise: Option<u32>,
    pub note: Option<String>,
    pub date: Option<String>,
}

pub fn cmd_checkin(session: &Session, args: CheckInArgs, now: DateTime<Local>) -> Result<()> {
    let date = args
        .date
        .as_deref()
        .map(parse_date)
        .transpose()?
        .unwrap_or_else(|| now.date_naive());

    let existing = session.store.entry_for(&session.scope, date);
    let mut draft = match &existing {
        Some(entry) => CheckIn::from_entry(entry),
        None => CheckIn {
            date: Some(date),
            ..CheckIn::default()
        },
    };

    if let Some(mood) = args.mood {
        draft.mood = Some(MoodRating::new(mood)?);
    }
    if let Some(screen) = args.screen.as_deref() {
        let level: ScreenTimeLevel = screen.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        draft.screen_time = Some(level);
    }
    if let Some(sleep) = args.sleep {
        draft.sleep_hours = sleep;
    }
    if let Some(exercise) = args.exercise {
        draft.exercise_minutes = exercise;
    }
    if let Some(note) = args.note {
        draft.note = note;
    }

    if !draft.is_complete() {
        bail!("Mood and screen time are required: pulse checkin --mood 1-5 --screen low|medium|high");
    }

    let entry = draft.into_entry(now).context("Invalid check-in")?;
    session
        .store
        .upsert(entry.clone(), &session.scope)
        .context("Failed to save check-in")?;

    println!();
    if existing.is_some() {
        println!("✏️  Updated check-in for {}", entry.date);
    } else {
        println!("✅ Logged check-in for {}", entry.date);
    }
    print_entry(&entry);
    onboarding_hint(session);

    Ok(())
}

pub fn cmd_today(session: &Session, now: DateTime<Local>) -> Result<()> {
    let today = now.date_naive();
    let entries = session.store.list(&session.scope);

    println!();
    println!("📅 {}", now.format("%A, %B %-d"));
    println!("   ─────────────────────────────");

    match entries.iter().find(|e| e.date == today) {
        Some(entry) => print_entry(entry),
        None => {
            println!("   No check-in yet today. Run:");
            println!("     pulse checkin --mood 1-5 --screen low|medium|high");
        }
    }

    println!();
    println!("   Last 7 days");
    for day in recent_days(&entries, today) {
        let gauge = day
            .entry
            .as_ref()
            .map(|e| mood_dots(e.mood.value()))
            .unwrap_or_else(|| "·".to_string());
        println!("   {} {:>2}  {}", day.date.format("%a"), day.date.format("%-d"), gauge);
    }

    let suggestion_id = session
        .store
        .suggestion_id(&session.scope)
        .unwrap_or_else(|| Suggestion::initial().id.to_string());
    println!();
    println!("   💡 {}", Suggestion::find(&suggestion_id).text);

    Ok(())
}

pub fn cmd_entries(session: &Session, limit: usize) -> Result<()> {
    let entries = session.store.list(&session.scope);

    if entries.is_empty() {
        println!("No entries yet. Log your first day with:");
        println!("  pulse checkin --mood 4 --screen low");
        return Ok(());
    }

    println!();
    println!("📓 Entries ({} total)", entries.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for entry in entries.iter().take(limit) {
        println!(
            "   {} │ {} {:5} │ {:>4.1}h sleep │ {:>3}m move │ {:6} │ {}",
            entry.date,
            mood_dots(entry.mood.value()),
            entry.mood.label(),
            entry.sleep_hours,
            entry.exercise_minutes,
            entry.screen_time.as_str(),
            truncate(&entry.note, 24)
        );
    }

    Ok(())
}

fn print_entry(entry: &DailyEntry) {
    println!(
        "   Mood:         {} {}",
        mood_dots(entry.mood.value()),
        entry.mood.label()
    );
    println!("   Sleep:        {}h", entry.sleep_hours);
    println!("   Movement:     {}m", entry.exercise_minutes);
    println!(
        "   Screen time:  {} ({})",
        entry.screen_time,
        entry.screen_time.hint()
    );
    if !entry.note.is_empty() {
        println!("   Note:         {}", entry.note);
    }
}
