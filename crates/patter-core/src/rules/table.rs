//! The compile-time rule table.
//!
//! Every reply the bot can give lives here. Adding a branch to the bot means
//! adding one entry, not touching the engine. Trigger strings are stored
//! pre-normalized (lowercase, no surrounding whitespace) so the engine can
//! compare them directly against normalized input.

use patter_types::rule::{Rule, RuleKind};

/// Trigger-bearing rules, checked in order. Trigger sets are disjoint, so
/// ordering only matters for readers, not for results.
pub const RULES: &[Rule] = &[
    Rule {
        kind: RuleKind::Greeting,
        triggers: &["hello", "hi", "hey"],
        reply: "Hi!",
        explanation: "Used the first if condition because the user sent a greeting.",
    },
    Rule {
        kind: RuleKind::Wellbeing,
        triggers: &["how are you", "how are you?"],
        reply: "I'm fine, thanks!",
        explanation: "Entered the elif branch that handles 'how are you' statements.",
    },
    Rule {
        kind: RuleKind::Farewell,
        triggers: &["bye", "goodbye"],
        reply: "Goodbye!",
        explanation: "Matched the farewell elif branch for goodbye statements.",
    },
];

/// The catch-all rule. It has no triggers; it matches by every other rule
/// not matching, which makes classification total.
pub const FALLBACK: Rule = Rule {
    kind: RuleKind::Fallback,
    triggers: &[],
    reply: "I didn't understand that yet.",
    explanation: "Fell through to the else block since no predefined rule matched.",
};

/// The full table in evaluation order, fallback last. This is the view the
/// CLI and HTTP rule listings expose.
pub fn rules() -> Vec<&'static Rule> {
    RULES.iter().chain(std::iter::once(&FALLBACK)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trigger_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for rule in RULES {
            for trigger in rule.triggers {
                assert!(
                    seen.insert(*trigger),
                    "trigger '{trigger}' appears in more than one rule"
                );
            }
        }
    }

    #[test]
    fn triggers_are_pre_normalized() {
        for rule in RULES {
            for trigger in rule.triggers {
                assert_eq!(
                    *trigger,
                    trigger.trim().to_lowercase(),
                    "trigger '{trigger}' is not stored in normalized form"
                );
            }
        }
    }

    #[test]
    fn fallback_has_no_triggers() {
        assert!(FALLBACK.triggers.is_empty());
        assert_eq!(FALLBACK.kind, RuleKind::Fallback);
    }

    #[test]
    fn rules_listing_ends_with_fallback() {
        let all = rules();
        assert_eq!(all.len(), RULES.len() + 1);
        assert_eq!(all.last().unwrap().kind, RuleKind::Fallback);
        assert_eq!(all[0].kind, RuleKind::Greeting);
    }

    #[test]
    fn every_rule_has_reply_and_explanation() {
        for rule in rules() {
            assert!(!rule.reply.is_empty());
            assert!(!rule.explanation.is_empty());
        }
    }
}
