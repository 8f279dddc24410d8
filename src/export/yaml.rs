//! YAML Export functionality
//!
//! Same content as the JSON export, in a format that is pleasant to read.

use std::io::Write;

use crate::error::{PettyCashError, PettyCashResult};
use crate::export::json::LedgerExport;
use crate::services::OrderedEntries;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(ordered: &OrderedEntries, writer: &mut W) -> PettyCashResult<()> {
    let export = LedgerExport::from_ordered(ordered)?;

    writeln!(writer, "# pettycash ledger export")
        .map_err(|e| PettyCashError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PettyCashError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PettyCashError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PettyCashError::Export(e.to_string()))?;

    Ok(())
}
