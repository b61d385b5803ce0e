//! CLI command implementations
//!
//! Commands are organized by view:
//! - `checkin` - Check-in, today's dashboard, entry list
//! - `insights` - Weekly trend and habit patterns
//! - `session` - Session setup shared by every command (open_session)
//! - `status` - Status, seeding, onboarding, suggestions

pub mod checkin;
pub mod insights;
pub mod session;
pub mod status;

// Re-export command functions for main.rs
pub use checkin::*;
pub use insights::*;
pub use session::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Five-dot mood gauge, e.g. "●●●○○"
pub fn mood_dots(mood: u8) -> String {
    let filled = usize::from(mood.min(5));
    format!("{}{}", "●".repeat(filled), "○".repeat(5 - filled))
}
