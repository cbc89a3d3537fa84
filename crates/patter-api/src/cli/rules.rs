//! Rule table listing command.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use patter_core::rules::rules;

/// Display the rule table: kind, triggers, reply, and explanation per rule.
pub fn list_rules(json: bool) -> Result<()> {
    let all = rules();

    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rule").fg(Color::White),
        Cell::new("Triggers").fg(Color::White),
        Cell::new("Reply").fg(Color::White),
        Cell::new("Explanation").fg(Color::White),
    ]);

    for rule in &all {
        let triggers = if rule.triggers.is_empty() {
            "(anything else)".to_string()
        } else {
            rule.triggers.join(", ")
        };

        table.add_row(vec![
            Cell::new(rule.kind.to_string()).fg(Color::Cyan),
            Cell::new(triggers),
            Cell::new(rule.reply),
            Cell::new(rule.explanation).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} rule{}",
        style(all.len()).bold(),
        if all.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
