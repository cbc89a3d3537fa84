//! Shared domain types for Patter.
//!
//! This crate contains the core vocabulary of the rule-based chatbot:
//! conversation turns, session identifiers, the rule table entries, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod rule;
pub mod turn;
