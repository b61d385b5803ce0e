//! Insights command: weekly trend, chart series, and habit patterns

use anyhow::{Context, Result};
use pulse_core::insights::Tone;
use pulse_core::InsightEngine;

use super::{mood_dots, onboarding_hint, Session};

pub fn cmd_insights(session: &Session, json: bool) -> Result<()> {
    let entries = session.store.list(&session.scope);
    let report = InsightEngine::new().report(&entries);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No data yet. Log your first day to unlock insights:");
        println!("  pulse checkin --mood 4 --screen low");
        return Ok(());
    }

    println!();
    println!("📈 Weekly Insights");
    println!("   ─────────────────────────────");
    println!("   Average mood: {}/5", report.summary.avg_display());
    match report.summary.trend {
        0 => {}
        t if t > 0 => println!("   ↗ +{}% vs last week", t),
        t => println!("   ↘ {}% vs last week", t),
    }

    println!();
    for entry in &report.weekly {
        println!(
            "   {}  {}",
            entry.date.format("%a %b %-d"),
            mood_dots(entry.mood.value())
        );
    }

    if !report.findings.is_empty() {
        println!();
        println!("   Patterns");
        for finding in &report.findings {
            let icon = match finding.tone {
                Tone::Positive => "🌱",
                Tone::Negative => "📱",
                Tone::Neutral => "🔎",
            };
            println!("   {} {}: {}", icon, finding.title, finding.message);
        }
    }

    println!();
    onboarding_hint(session);
    Ok(())
}
