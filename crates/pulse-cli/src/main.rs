//! Pulse CLI - Daily mood and habit journal
//!
//! Usage:
//!   pulse checkin --mood 4 --screen low    Log today
//!   pulse today                            Dashboard summary
//!   pulse insights                         Weekly trend and patterns
//!   pulse --user alice status              Journal status for a user

mod cli;
mod commands;


use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let session = commands::open_session(cli.data_dir.as_deref(), cli.user.as_deref(), cli.plain)?;
    let now = Local::now();

    match cli.command {
        Commands::Checkin {
            mood,
            screen,
            sleep,
            exercise,
            note,
            date,
        } => {
            let args = commands::CheckInArgs {
                mood,
                screen,
                sleep,
                exercise,
                note,
                date,
            };
            commands::cmd_checkin(&session, args, now)
        }
        Commands::Today => commands::cmd_today(&session, now),
        Commands::Entries { limit } => commands::cmd_entries(&session, limit),
        Commands::Insights { json } => commands::cmd_insights(&session, json),
        Commands::Seed => commands::cmd_seed(&session, now),
        Commands::Onboarding { complete } => commands::cmd_onboarding(&session, complete),
        Commands::Suggestion { next } => commands::cmd_suggestion(&session, next),
        Commands::Status => commands::cmd_status(&session),
    }
}
