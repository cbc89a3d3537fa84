//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing what the bot
//! is, the session id, and how to get help.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(session_id: &str) {
    println!();
    println!("  🤖 {}", style("Patter").cyan().bold());
    println!(
        "  {}",
        style("A simple rule-based chatbot. Every reply names the rule that produced it.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Try \"hello\", \"how are you?\", or \"bye\" -- /rules shows the full table").dim()
    );
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
