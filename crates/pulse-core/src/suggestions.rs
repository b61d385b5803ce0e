//! Daily micro-suggestions shown on the dashboard

use serde::Serialize;

/// What area of well-being a suggestion targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Sleep,
    Movement,
    Mindfulness,
}

impl SuggestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Movement => "movement",
            Self::Mindfulness => "mindfulness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub text: &'static str,
    pub category: SuggestionCategory,
}

const CATALOG: &[Suggestion] = &[
    Suggestion {
        id: "1",
        text: "Try going to bed 30 minutes earlier tonight.",
        category: SuggestionCategory::Sleep,
    },
    Suggestion {
        id: "2",
        text: "A 10-minute walk could help reset your mood.",
        category: SuggestionCategory::Movement,
    },
    Suggestion {
        id: "3",
        text: "Consider a screen-free 30 minutes before bed.",
        category: SuggestionCategory::Sleep,
    },
    Suggestion {
        id: "4",
        text: "Drink a glass of water right now.",
        category: SuggestionCategory::Mindfulness,
    },
    Suggestion {
        id: "5",
        text: "Take 3 deep breaths before your next task.",
        category: SuggestionCategory::Mindfulness,
    },
    Suggestion {
        id: "6",
        text: "Stretch your legs for 5 minutes.",
        category: SuggestionCategory::Movement,
    },
];

impl Suggestion {
    pub fn all() -> &'static [Suggestion] {
        CATALOG
    }

    /// The suggestion shown before any has been dismissed
    pub fn initial() -> &'static Suggestion {
        &CATALOG[0]
    }

    /// Look up by id, falling back to the first suggestion
    pub fn find(id: &str) -> &'static Suggestion {
        CATALOG
            .iter()
            .find(|s| s.id == id)
            .unwrap_or_else(|| Self::initial())
    }

    /// The suggestion that replaces `id` when it is dismissed, wrapping around
    pub fn next_after(id: &str) -> &'static Suggestion {
        let index = CATALOG.iter().position(|s| s.id == id).unwrap_or(0);
        &CATALOG[(index + 1) % CATALOG.len()]
    }
}
