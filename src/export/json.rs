//! JSON Export functionality
//!
//! Exports the entry list with its report-order codes and total, for other
//! tools to consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, Entry};
use crate::services::OrderedEntries;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One exported line item in report order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub code: String,
}

/// One exported legend line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedLocation {
    pub code: String,
    pub location: String,
}

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Year the `MM/DD` dates were sorted in
    pub year: i32,

    /// Signed sum of all entries
    pub total: Amount,

    /// Entries sorted by date
    pub entries: Vec<ExportedEntry>,

    /// Location codes in discovery order
    pub locations: Vec<ExportedLocation>,
}

impl LedgerExport {
    /// Build the export from ordered entries
    pub fn from_ordered(ordered: &OrderedEntries) -> PettyCashResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            year: ordered.year(),
            total: ordered.total()?,
            entries: ordered
                .entries()
                .iter()
                .map(|c| ExportedEntry {
                    entry: c.entry.clone(),
                    code: c.code.to_string(),
                })
                .collect(),
            locations: ordered
                .codes()
                .iter()
                .map(|(location, code)| ExportedLocation {
                    code: code.to_string(),
                    location: location.to_string(),
                })
                .collect(),
        })
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(
    ordered: &OrderedEntries,
    writer: &mut W,
    pretty: bool,
) -> PettyCashResult<()> {
    let export = LedgerExport::from_ordered(ordered)?;

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    result.map_err(|e| PettyCashError::Export(e.to_string()))
}
