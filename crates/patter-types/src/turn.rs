//! Conversation turn and session identifier types for Patter.
//!
//! A [`Turn`] is the unit the conversation log is made of: one user
//! submission together with the reply the rule engine chose for it and the
//! explanation of which rule fired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a chat session, wrapping a UUID v7 (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new SessionId using UUID v7 (time-sortable, guaranteed ordering).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One recorded exchange: a user message, the canned reply it produced, and
/// the explanation of the rule that fired.
///
/// Turns are immutable once created. The conversation log hands them out by
/// shared reference or clone only, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    /// The raw text the user typed, before any normalization.
    pub user_text: String,
    /// The canned reply chosen by the rule engine.
    pub bot_reply: String,
    /// Which rule matched, in human-readable form.
    pub explanation: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Build a turn from the result of one classification.
    ///
    /// The id (UUID v7) and timestamp are assigned here; everything else is
    /// taken verbatim from the arguments.
    pub fn new(
        user_text: impl Into<String>,
        bot_reply: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_text: user_text.into(),
            bot_reply: bot_reply.into(),
            explanation: explanation.into(),
            created_at: Utc::now(),
        }
    }
}
