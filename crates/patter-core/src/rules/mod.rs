//! Message classification against the fixed rule table.
//!
//! This module is the rule-based stand-in for a language model:
//! - `table` -- the compile-time rule set, one entry per branch
//! - `engine` -- `normalize` and `classify`, the functions hosts call
//!   for every user message
//!
//! Classification is total: every input gets a reply, because the fallback
//! rule catches whatever the trigger sets miss.

pub mod engine;
pub mod table;

pub use engine::{classify, normalize};
pub use table::{rules, FALLBACK, RULES};
