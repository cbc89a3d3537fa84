//! Rule table entries and classification outcomes for Patter.
//!
//! These types model the data-driven rule set: each [`Rule`] pairs a trigger
//! set with a canned reply and an explanation, and a [`Reply`] is what the
//! rule engine hands back for one user message.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Which branch of the rule table fired for a message.
///
/// The variants are declared in evaluation order; `Fallback` is the default
/// branch that catches everything the trigger sets miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Greeting,
    Wellbeing,
    Farewell,
    Fallback,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Greeting => write!(f, "greeting"),
            RuleKind::Wellbeing => write!(f, "wellbeing"),
            RuleKind::Farewell => write!(f, "farewell"),
            RuleKind::Fallback => write!(f, "fallback"),
        }
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greeting" => Ok(RuleKind::Greeting),
            "wellbeing" => Ok(RuleKind::Wellbeing),
            "farewell" => Ok(RuleKind::Farewell),
            "fallback" => Ok(RuleKind::Fallback),
            other => Err(format!("invalid rule kind: '{other}'")),
        }
    }
}

impl Default for RuleKind {
    fn default() -> Self {
        RuleKind::Fallback
    }
}

/// One entry in the fixed rule table.
///
/// Rules are defined once at compile time and never mutated, so every field
/// is a `'static` borrow. A message matches when its normalized form is
/// contained in `triggers`; the fallback rule has an empty trigger set and
/// matches by not matching.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    pub kind: RuleKind,
    /// Exact normalized strings that activate this rule.
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
    pub explanation: &'static str,
}

/// The outcome of classifying one user message: the canned reply, the
/// human-readable explanation of which rule fired, and the machine-readable
/// rule tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub explanation: String,
    pub rule: RuleKind,
}

impl Reply {
    /// Build a reply from the rule that matched.
    pub fn for_rule(rule: &Rule) -> Self {
        Self {
            text: rule.reply.to_string(),
            explanation: rule.explanation.to_string(),
            rule: rule.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_roundtrip() {
        for kind in [
            RuleKind::Greeting,
            RuleKind::Wellbeing,
            RuleKind::Farewell,
            RuleKind::Fallback,
        ] {
            let s = kind.to_string();
            let parsed: RuleKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_rule_kind_serde() {
        let kind = RuleKind::Greeting;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"greeting\"");
        let parsed: RuleKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RuleKind::Greeting);
    }

    #[test]
    fn test_rule_kind_default_is_fallback() {
        assert_eq!(RuleKind::default(), RuleKind::Fallback);
    }

    #[test]
    fn test_rule_kind_rejects_unknown() {
        assert!("smalltalk".parse::<RuleKind>().is_err());
    }

    #[test]
    fn test_reply_for_rule_copies_strings() {
        let rule = Rule {
            kind: RuleKind::Farewell,
            triggers: &["bye"],
            reply: "Goodbye!",
            explanation: "matched the farewell rule",
        };
        let reply = Reply::for_rule(&rule);
        assert_eq!(reply.text, "Goodbye!");
        assert_eq!(reply.explanation, "matched the farewell rule");
        assert_eq!(reply.rule, RuleKind::Farewell);
    }

    #[test]
    fn test_rule_serialize_includes_triggers() {
        let rule = Rule {
            kind: RuleKind::Greeting,
            triggers: &["hello", "hi"],
            reply: "Hi!",
            explanation: "greeting",
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"kind\":\"greeting\""));
        assert!(json.contains("\"triggers\":[\"hello\",\"hi\"]"));
    }
}
