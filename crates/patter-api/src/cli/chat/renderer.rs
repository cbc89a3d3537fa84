//! Terminal rendering of conversation turns.
//!
//! Replies are short canned strings, so rendering is three styled lines per
//! turn: the user line green, the bot line cyan, the explanation dim. The
//! labels come from the core render module; this file only adds color and
//! indentation.

use console::style;

use patter_core::session::TurnBlock;

/// Print one turn as its three labelled lines.
pub fn print_block(block: &TurnBlock<'_>) {
    println!("  {}", style(block.user_line()).green());
    println!("  {}", style(block.bot_line()).cyan());
    println!("  {}", style(block.explanation_line()).dim());
}

/// Print a whole transcript, blank line between turns.
pub fn print_transcript(blocks: &[TurnBlock<'_>]) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_block(block);
    }
}
