//! Classification: one user message in, one [`Reply`] out.
//!
//! Matching is exact-after-normalization. The engine lowercases and trims the
//! input, then looks for it in each rule's trigger set. There is no substring
//! or fuzzy matching: "hi there" is not a greeting, and "hello!" falls
//! through, because neither string appears verbatim in a trigger set. The
//! only punctuation tolerated is what a trigger spells out itself, like
//! "how are you?".

use patter_types::rule::Reply;

use super::table::{FALLBACK, RULES};

/// Canonical form of a user message for trigger comparison: surrounding
/// whitespace stripped, everything lowercased. Interior whitespace and
/// punctuation are kept as-is.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Match a raw user message against the rule table.
///
/// Total and deterministic: every input maps to exactly one reply, and the
/// same input always maps to the same reply. Inputs that match no trigger
/// set (including empty or whitespace-only ones) get the fallback.
pub fn classify(input: &str) -> Reply {
    let normalized = normalize(input);
    let rule = RULES
        .iter()
        .find(|rule| rule.triggers.contains(&normalized.as_str()))
        .unwrap_or(&FALLBACK);
    tracing::debug!(rule = %rule.kind, "classified message");
    Reply::for_rule(rule)
}
