//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: session setup, welcome banner,
//! input loop with slash commands, classification, and transcript rendering.

use console::style;
use tracing::info;

use patter_core::rules::classify;
use patter_core::session::{ConversationLog, TurnBlock};
use patter_types::turn::SessionId;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;

/// Run the interactive chat loop.
///
/// The loop owns its [`ConversationLog`] directly; no shared or global
/// state holds conversation history. Each accepted message is classified,
/// recorded, and echoed as a labelled block. The terminal scrollback keeps
/// earlier blocks visible; `/history` re-renders the whole log.
pub async fn run_chat_loop() -> anyhow::Result<()> {
    let session_id = SessionId::new();
    let mut log = ConversationLog::new();

    print_welcome_banner(&session_id.to_string());

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let event = chat_input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                // Empty submissions are skipped, not classified
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => {
                            commands::print_help();
                            continue;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            continue;
                        }
                        ChatCommand::History => {
                            if log.is_empty() {
                                println!("\n  {}\n", style("Nothing said yet.").dim());
                            } else {
                                println!();
                                renderer::print_transcript(&log.render());
                                println!();
                            }
                            continue;
                        }
                        ChatCommand::Rules => {
                            crate::cli::rules::list_rules(false)?;
                            continue;
                        }
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd_name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(cmd_name).dim()
                            );
                            continue;
                        }
                    }
                }

                let reply = classify(&text);
                let turn = log.record_turn(text, reply);

                println!();
                renderer::print_block(&TurnBlock::new(turn));
                println!();
            }
        }
    }

    info!(session = %session_id, turns = log.len(), "chat session ended");
    Ok(())
}
