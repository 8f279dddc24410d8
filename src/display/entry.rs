//! Entry display formatting
//!
//! Terminal tables for the entry list (insertion order) and the sorted
//! preview with location codes.

use tabled::settings::object::Columns;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};

use crate::models::{Amount, Entry};
use crate::services::OrderedEntries;

use super::report::{format_amount_colored, right_align};

/// Widest description shown in list tables, in terminal columns
const DESCRIPTION_WIDTH: usize = 32;

/// Cut the description column to `DESCRIPTION_WIDTH` display columns
fn limit_description(table: &mut Table, column: usize) {
    table.with(
        Modify::new(Columns::single(column))
            .with(Width::truncate(DESCRIPTION_WIDTH).suffix("...")),
    );
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Location")]
    location: String,
}

#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Location")]
    location: String,
}

/// Format entries in the order they were added
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let rows = entries.iter().enumerate().map(|(i, e)| EntryRow {
        index: i + 1,
        date: e.date.clone(),
        description: e.description.clone(),
        amount: e.amount.format_grouped(),
        location: e.location.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    limit_description(&mut table, 2);
    format!("{}\n", table)
}

/// Format entries in report order with their location codes and legend
pub fn format_ordered_preview(ordered: &OrderedEntries) -> String {
    if ordered.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let rows = ordered.entries().iter().map(|c| PreviewRow {
        date: c.entry.date.clone(),
        description: c.entry.description.clone(),
        amount: c.entry.amount.format_grouped(),
        code: c.code.to_string(),
        location: c.entry.location.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    limit_description(&mut table, 1);

    let mut output = format!("{}\n\nLocation codes:\n", table);
    for (location, code) in ordered.codes().iter() {
        output.push_str(&format!("  {}  {}\n", right_align(code.as_str(), 3), location));
    }
    output
}

/// One-line running total, colored by sign
pub fn format_total_banner(total: Amount, count: usize, symbol: &str) -> String {
    format!(
        "Running total: {} ({} {})",
        format_amount_colored(total, symbol),
        count,
        if count == 1 { "entry" } else { "entries" }
    )
}

/// Confirmation line after an entry is added
pub fn format_entry_added(entry: &Entry) -> String {
    format!("Added: {}", entry)
}
