//! U.S. state name extraction from free text
//!
//! Two passes over the lowercased query:
//! 1. substring containment against the 50 canonical names (longest match wins)
//! 2. whole-query fuzzy similarity, accepted only at or above FUZZY_CUTOFF
//!
//! Similarity is the character diff ratio `2*M/T` (matched characters over the combined
//! length), the same measure difflib's `get_close_matches` uses. The fuzzy pass compares the
//! entire query, not individual words, so short state names inside long sentences rarely
//! clear the cutoff.

use std::fmt;

use similar::TextDiff;

/// Minimum similarity for the fuzzy fallback
pub const FUZZY_CUTOFF: f32 = 0.75;

pub const US_STATES: [&str; 50] = [
    "alabama",
    "alaska",
    "arizona",
    "arkansas",
    "california",
    "colorado",
    "connecticut",
    "delaware",
    "florida",
    "georgia",
    "hawaii",
    "idaho",
    "illinois",
    "indiana",
    "iowa",
    "kansas",
    "kentucky",
    "louisiana",
    "maine",
    "maryland",
    "massachusetts",
    "michigan",
    "minnesota",
    "mississippi",
    "missouri",
    "montana",
    "nebraska",
    "nevada",
    "new hampshire",
    "new jersey",
    "new mexico",
    "new york",
    "north carolina",
    "north dakota",
    "ohio",
    "oklahoma",
    "oregon",
    "pennsylvania",
    "rhode island",
    "south carolina",
    "south dakota",
    "tennessee",
    "texas",
    "utah",
    "vermont",
    "virginia",
    "washington",
    "west virginia",
    "wisconsin",
    "wyoming",
];

/// Canonical lowercase state name from US_STATES
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateName(&'static str);

impl StateName {
    /// Accept an exact canonical name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        US_STATES
            .iter()
            .copied()
            .find(|state| *state == name)
            .map(StateName)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Each word capitalised: "new york" -> "New York"
    pub fn title(&self) -> String {
        self.0
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// Find the U.S. state a query is about, if any
pub fn extract_state(query: &str) -> Option<StateName> {
    let query = query.to_lowercase();

    // Longest contained name, so "west virginia" beats "virginia"
    let mut contained: Option<&'static str> = None;
    for state in US_STATES {
        if query.contains(state) && contained.map_or(true, |best| state.len() > best.len()) {
            contained = Some(state);
        }
    }
    if let Some(state) = contained {
        return Some(StateName(state));
    }

    let mut best: Option<(&'static str, f32)> = None;
    for state in US_STATES {
        let score = similarity(&query, state);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((state, score));
        }
    }

    match best {
        Some((state, score)) if score >= FUZZY_CUTOFF => {
            tracing::debug!("[EXTRACT] Fuzzy matched '{}' to {} ({:.3})", query, state, score);
            Some(StateName(state))
        }
        _ => None,
    }
}

/// Character diff ratio in [0, 1]
fn similarity(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}
