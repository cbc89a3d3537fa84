//! Interactive CLI chat experience for Patter.
//!
//! This module implements the full chat loop: the welcome banner, async
//! readline input, slash commands, classification, and transcript
//! rendering. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
