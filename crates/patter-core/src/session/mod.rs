//! Conversation state: the append-only log and its views.
//!
//! - `log` -- `ConversationLog`, the turn history of one conversation
//! - `render` -- `TurnBlock`, the labelled three-line view of one turn
//! - `registry` -- `SessionRegistry`, a concurrent map of logs for hosts
//!   that serve more than one conversation at a time
//!
//! The log is the single source of truth for what was said. Hosts never
//! cache replies elsewhere; they re-read the log whenever they need to
//! show history.

pub mod log;
pub mod registry;
pub mod render;

pub use log::ConversationLog;
pub use registry::SessionRegistry;
pub use render::{TurnBlock, BOT_LABEL, EXPLANATION_LABEL, USER_LABEL};
