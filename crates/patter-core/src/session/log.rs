//! The append-only conversation log.

use patter_types::rule::Reply;
use patter_types::turn::Turn;

use super::render::TurnBlock;

/// Ordered history of one conversation.
///
/// Turns are only ever appended; nothing edits or removes a recorded turn.
/// Starting over means dropping the whole log and building a new one, which
/// is what the hosts' "clear" actions do.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append one exchange and return the recorded turn.
    pub fn record_turn(&mut self, user_text: impl Into<String>, reply: Reply) -> &Turn {
        self.turns
            .push(Turn::new(user_text, reply.text, reply.explanation));
        self.turns.last().expect("log is non-empty after push")
    }

    /// All recorded turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The full history as labelled blocks, one per turn, oldest first.
    pub fn render(&self) -> Vec<TurnBlock<'_>> {
        self.turns.iter().map(TurnBlock::new).collect()
    }
}
