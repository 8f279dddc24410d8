//! CSV Export functionality
//!
//! Writes the entries in report order with their location code, one row per
//! entry, for spreadsheet use.

use serde::Serialize;
use std::io::Write;

use crate::error::{PettyCashError, PettyCashResult};
use crate::services::OrderedEntries;

#[derive(Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    description: &'a str,
    amount: i64,
    location: &'a str,
    code: &'a str,
}

/// Export entries in date order to CSV
pub fn export_entries_csv<W: Write>(ordered: &OrderedEntries, writer: &mut W) -> PettyCashResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for coded in ordered.entries() {
        wtr.serialize(CsvRow {
            date: &coded.entry.date,
            description: &coded.entry.description,
            amount: coded.entry.amount.units(),
            location: &coded.entry.location,
            code: coded.code.as_str(),
        })
        .map_err(|e| PettyCashError::Export(e.to_string()))?;
    }

    wtr.flush()
        .map_err(|e| PettyCashError::Export(e.to_string()))?;
    Ok(())
}
