//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pulse - Log your mood and habits, see what makes your best days
#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Daily mood and habit journal with weekly insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: ~/.local/share/pulse, or PULSE_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Signed-in user id; omit to use the guest journal
    #[arg(long, global = true, env = "PULSE_USER")]
    pub user: Option<String>,

    /// Write entries as plain JSON instead of the obfuscated form
    #[arg(long, global = true)]
    pub plain: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log (or update) a day's check-in
    Checkin {
        /// Mood from 1 (rough) to 5 (great)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: Option<u8>,

        /// Screen time: low (<2h), medium (2-4h), high (4h+)
        #[arg(short, long)]
        screen: Option<String>,

        /// Hours slept
        #[arg(long)]
        sleep: Option<f64>,

        /// Minutes of exercise
        #[arg(short, long)]
        exercise: Option<u32>,

        /// Short note (up to 140 characters)
        #[arg(short, long)]
        note: Option<String>,

        /// Day to log, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show today's check-in, the last 7 days, and a suggestion
    Today,

    /// List logged entries, newest first
    Entries {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "14")]
        limit: usize,
    },

    /// Show weekly mood trend and habit patterns
    Insights {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill an empty journal with 10 days of demo data
    Seed,

    /// Show or complete onboarding
    Onboarding {
        /// Mark onboarding as finished
        #[arg(long)]
        complete: bool,
    },

    /// Show the current suggestion
    Suggestion {
        /// Dismiss the current suggestion and show the next one
        #[arg(long)]
        next: bool,
    },

    /// Show storage location, scope, and journal status
    Status,
}
