//! Utterance parsing: budget amounts and room-number references.
//!
//! Both are best-effort scans over raw text, not grammars. The room-number
//! heuristics reproduce a known exclusion table for multi-digit collisions
//! ("12" must not read as room 1); inputs outside that table stay ambiguous
//! and resolve to the lowest matching digit.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Literal phrases per room index, checked before any digit heuristics.
const ROOM_PHRASES: [(usize, &str, &str); 3] = [
    (1, "room 1", "first room"),
    (2, "room 2", "second room"),
    (3, "room 3", "third room"),
];

/// Single-digit probes with their exclusion lists: the digit only matches when
/// none of the listed two-digit strings appear anywhere in the message.
const DIGIT_EXCLUSIONS: [(usize, &str, [&str; 5]); 3] = [
    (1, "1", ["11", "12", "13", "21", "31"]),
    (2, "2", ["12", "21", "22", "23", "32"]),
    (3, "3", ["13", "23", "31", "32", "33"]),
];

/// Extracts a budget as the first embedded digit run: "15000 taka" → 15000,
/// "around 8,000" → 8 (a comma splits the run). `None` only when the text has
/// no digits at all.
pub fn parse_budget(raw: &str) -> Option<i64> {
    FIRST_DIGIT_RUN
        .find(raw)
        .and_then(|m| m.as_str().parse().ok())
}

/// Extracts a 1–3 room reference from an utterance: literal phrases and an exact
/// trimmed digit first, then the single-digit probes in fixed order 1 → 2 → 3.
pub fn parse_room_reference(text: &str) -> Option<usize> {
    let message = text.to_lowercase();
    let trimmed = message.trim();

    for (index, phrase, ordinal) in ROOM_PHRASES {
        if message.contains(phrase) || message.contains(ordinal) || trimmed == index.to_string() {
            return Some(index);
        }
    }

    for (index, digit, exclusions) in DIGIT_EXCLUSIONS {
        if message.contains(digit) && !exclusions.iter().any(|pair| message.contains(pair)) {
            return Some(index);
        }
    }

    None
}
