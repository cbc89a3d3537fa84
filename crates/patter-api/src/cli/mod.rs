//! CLI command definitions and dispatch for the `patter` binary.
//!
//! Uses clap derive macros for argument parsing. One conversation per
//! invocation of `patter chat`; the other commands are one-shot.

pub mod chat;
pub mod classify;
pub mod rules;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A tiny rule-based chatbot that explains every reply.
#[derive(Parser)]
#[command(name = "patter", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Classify a single message and print the reply.
    Classify {
        /// The message to classify.
        text: String,
    },

    /// Show the rule table.
    Rules,

    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
