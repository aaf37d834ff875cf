//! Terminal rendering: banner, found panel, not-found notice.

use colored::Colorize;

use crate::{freefire::record::PlayerRecord, Result};

/// Columns between the vertical borders of the result panel.
const PANEL_WIDTH: usize = 38;

/// Startup banner, printed before any processing.
pub fn banner() {
    println!("{}", format!("╔{}╗", "═".repeat(PANEL_WIDTH)).red());
    println!(
        "{}{}{}",
        "║".red(),
        format!("{:^width$}", "Free Fire ID Checker v2.0", width = PANEL_WIDTH).yellow(),
        "║".red()
    );
    println!("{}", format!("╚{}╝", "═".repeat(PANEL_WIDTH)).red());
}

/// Render the outcome as the text report or, with `as_json`, as pretty JSON
/// (`null` when no endpoint answered).
pub fn render_result(result: Option<&PlayerRecord>, as_json: bool) -> Result<()> {
    if as_json {
        match result {
            Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
            None => println!("null"),
        }
    } else {
        display_result(result);
    }
    Ok(())
}

/// Print the appropriate report for a lookup outcome.
pub fn display_result(result: Option<&PlayerRecord>) {
    println!("{}", report_for(result));
}

/// Decide between the two mutually exclusive reports: the found panel for a
/// record with `status == true`, the not-found notice for everything else.
pub fn report_for(result: Option<&PlayerRecord>) -> String {
    match result {
        Some(record) if record.status => found_report(record),
        Some(record) => not_found_report(Some(&record.player_id)),
        None => not_found_report(None),
    }
}

fn found_report(record: &PlayerRecord) -> String {
    let lines = vec![
        format!("╔{}╗", "═".repeat(PANEL_WIDTH)).green().to_string(),
        title_row("PLAYER FOUND!"),
        format!("╠{}╣", "═".repeat(PANEL_WIDTH)).green().to_string(),
        field_row("ID:", &record.player_id),
        field_row("Name:", &record.name),
        field_row("Level:", &record.level.to_string()),
        field_row("Rank:", &record.rank),
        field_row("Kills:", &record.kills.to_string()),
        field_row("Wins:", &record.wins.to_string()),
        format!("╚{}╝", "═".repeat(PANEL_WIDTH)).green().to_string(),
    ];
    lines.join("\n")
}

fn not_found_report(player_id: Option<&str>) -> String {
    let id = player_id.unwrap_or("Unknown");
    format!(
        "\n{}\n{}",
        format!("[!] Player ID {id} not found!").red(),
        "Try a valid Free Fire ID (8-12 digits)".yellow()
    )
}

fn title_row(title: &str) -> String {
    format!(
        "{}{}{}",
        "║".green(),
        format!("{:^width$}", title, width = PANEL_WIDTH).yellow(),
        "║".green()
    )
}

/// One labeled panel row; the value is centered in the remaining columns.
fn field_row(label: &str, value: &str) -> String {
    let label = format!(" {label:<6}");
    let value_width = PANEL_WIDTH - label.len();
    format!(
        "{}{}{}{}",
        "║".green(),
        label.cyan(),
        format!("{:^width$}", value, width = value_width).white(),
        "║".green()
    )
}
