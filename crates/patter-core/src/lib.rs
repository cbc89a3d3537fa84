//! Rule engine and conversation session logic for Patter.
//!
//! This crate owns the deterministic heart of the chatbot: the fixed rule
//! table, message classification, and the append-only conversation log.
//! Everything here is synchronous and side-effect free. It depends only on
//! `patter-types` -- never on HTTP, terminal, or async crates.

pub mod rules;
pub mod session;
