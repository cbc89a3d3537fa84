//! Concurrent session registry for multi-conversation hosts.
//!
//! The HTTP server keeps one [`ConversationLog`] per session id in here.
//! Single-conversation hosts like the CLI chat loop own their log directly
//! and never touch the registry.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use patter_types::error::SessionError;
use patter_types::rule::Reply;
use patter_types::turn::{SessionId, Turn};

use super::log::ConversationLog;

/// Map of live conversations, keyed by session id.
///
/// Cloning produces a shared view of the same underlying sessions (backed
/// by `Arc`). All methods take `&self`; interior mutability comes from the
/// `DashMap`. Entries live until the process exits, there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<SessionId, ConversationLog>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Create a fresh session with an empty log and return its id.
    pub fn open(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id.clone(), ConversationLog::new());
        tracing::debug!(session = %id, "opened session");
        id
    }

    /// Ensure a session exists for `id`, creating an empty log only if none
    /// is there yet. Returns `true` when this call created the session.
    ///
    /// Calling this again for a live session is a no-op that leaves the
    /// recorded history exactly as it was.
    pub fn init(&self, id: &SessionId) -> bool {
        match self.sessions.entry(id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(ConversationLog::new());
                tracing::debug!(session = %id, "initialized session");
                true
            }
        }
    }

    /// Append one exchange to the session's log.
    pub fn record_turn(
        &self,
        id: &SessionId,
        user_text: &str,
        reply: Reply,
    ) -> Result<Turn, SessionError> {
        let mut log = self.sessions.get_mut(id).ok_or(SessionError::NotFound)?;
        let turn = log.record_turn(user_text, reply).clone();
        tracing::debug!(session = %id, turns = log.len(), "recorded turn");
        Ok(turn)
    }

    /// All turns of the session, oldest first.
    pub fn transcript(&self, id: &SessionId) -> Result<Vec<Turn>, SessionError> {
        let log = self.sessions.get(id).ok_or(SessionError::NotFound)?;
        Ok(log.turns().to_vec())
    }

    /// The session's history as flat labelled lines, three per turn.
    pub fn render(&self, id: &SessionId) -> Result<Vec<String>, SessionError> {
        let log = self.sessions.get(id).ok_or(SessionError::NotFound)?;
        Ok(log.render().iter().flat_map(|block| block.lines()).collect())
    }

    pub fn turn_count(&self, id: &SessionId) -> Result<usize, SessionError> {
        let log = self.sessions.get(id).ok_or(SessionError::NotFound)?;
        Ok(log.len())
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::classify;

    #[test]
    fn open_creates_distinct_sessions() {
        let registry = SessionRegistry::new();
        let a = registry.open();
        let b = registry.open();
        assert_ne!(a, b);
        assert_eq!(registry.session_count(), 2);
    }

    #[test]
    fn init_creates_once_and_preserves_history() {
        let registry = SessionRegistry::new();
        let id = SessionId::new();

        assert!(registry.init(&id));
        registry.record_turn(&id, "hello", classify("hello")).unwrap();
        registry.record_turn(&id, "bye", classify("bye")).unwrap();

        assert!(!registry.init(&id));
        assert_eq!(registry.turn_count(&id).unwrap(), 2);
        assert_eq!(registry.session_count(), 1);
    }

    #[test]
    fn record_turn_unknown_session_is_not_found() {
        let registry = SessionRegistry::new();
        let result = registry.record_turn(&SessionId::new(), "hello", classify("hello"));
        assert!(matches!(result, Err(SessionError::NotFound)));
    }

    #[test]
    fn transcript_returns_turns_in_order() {
        let registry = SessionRegistry::new();
        let id = registry.open();
        registry.record_turn(&id, "hello", classify("hello")).unwrap();
        registry
            .record_turn(&id, "how are you", classify("how are you"))
            .unwrap();

        let turns = registry.transcript(&id).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].user_text, "hello");
        assert_eq!(turns[1].bot_reply, "I'm fine, thanks!");
    }

    #[test]
    fn render_emits_three_lines_per_turn() {
        let registry = SessionRegistry::new();
        let id = registry.open();
        registry.record_turn(&id, "hey", classify("hey")).unwrap();

        let lines = registry.render(&id).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "You: hey");
        assert_eq!(lines[1], "Bot: Hi!");
        assert!(lines[2].starts_with("Explanation:"));
    }

    #[test]
    fn sessions_do_not_share_history() {
        let registry = SessionRegistry::new();
        let a = registry.open();
        let b = registry.open();
        registry.record_turn(&a, "hello", classify("hello")).unwrap();

        assert_eq!(registry.turn_count(&a).unwrap(), 1);
        assert_eq!(registry.turn_count(&b).unwrap(), 0);
    }

    #[test]
    fn clone_shares_sessions() {
        let registry = SessionRegistry::new();
        let view = registry.clone();
        let id = registry.open();

        view.record_turn(&id, "hello", classify("hello")).unwrap();

        assert_eq!(registry.turn_count(&id).unwrap(), 1);
        assert_eq!(view.session_count(), 1);
    }

    #[test]
    fn concurrent_access_no_panic() {
        let registry = SessionRegistry::new();
        let ids: Vec<SessionId> = (0..4).map(|_| registry.open()).collect();
        let mut handles = Vec::new();

        for id in &ids {
            let registry = registry.clone();
            let id = id.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..25 {
                    registry.record_turn(&id, "hello", classify("hello")).unwrap();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        for id in &ids {
            assert_eq!(registry.turn_count(id).unwrap(), 25);
        }
    }
}
