//! One-shot classification command.

use anyhow::Result;
use console::style;

use patter_core::rules::classify;

/// Classify a single message and print the reply with its explanation.
///
/// Empty input is refused here rather than classified; interactive hosts
/// skip empty submissions the same way.
pub fn classify_message(text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("cannot classify an empty message");
    }

    let reply = classify(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("Bot:").cyan().bold(), reply.text);
    println!(
        "  {} {}",
        style("Explanation:").bold(),
        style(&reply.explanation).dim()
    );
    println!();

    Ok(())
}
