//! CLI command for data export
//!
//! Writes the entries in report order, with their location codes, as CSV,
//! JSON or YAML.

use crate::error::{PettyCashError, PettyCashResult};
use crate::export::{export_entries_csv, export_json, export_yaml};
use crate::services::{current_year, EntryService, OrderedEntries};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per entry)
    Csv,
    /// JSON format (entries, codes and total)
    Json,
    /// YAML format (entries, codes and total, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Year used to interpret MM/DD dates (default: current year)
    #[arg(long)]
    pub year: Option<i32>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> PettyCashResult<()> {
    let ordered = EntryService::new(storage).ordered(args.year.unwrap_or_else(current_year))?;

    let file = File::create(&args.output).map_err(|e| {
        PettyCashError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    write_export(&ordered, args.format, args.pretty, BufWriter::new(file))?;

    println!(
        "Exported {} entries to: {}",
        ordered.len(),
        args.output.display()
    );

    Ok(())
}

/// Write the export and flush, so buffered write errors surface here
fn write_export<W: Write>(
    ordered: &OrderedEntries,
    format: ExportFormat,
    pretty: bool,
    mut writer: W,
) -> PettyCashResult<()> {
    match format {
        ExportFormat::Csv => export_entries_csv(ordered, &mut writer)?,
        ExportFormat::Json => export_json(ordered, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(ordered, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| PettyCashError::Export(format!("Failed to finish writing export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use std::io;

    /// Accepts every write but fails when flushed, like a full disk
    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("no space left"))
        }
    }

    fn ordered() -> OrderedEntries {
        OrderedEntries::prepare(&[Entry::new("01/05", "Lunch", -100, "Site A")], 2025)
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let err = write_export(&ordered(), ExportFormat::Json, false, FlushFails(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, PettyCashError::Export(_)));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_buffered_output_is_complete() {
        let mut buffer = Vec::new();
        write_export(
            &ordered(),
            ExportFormat::Yaml,
            false,
            BufWriter::new(&mut buffer),
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# pettycash ledger export"));
        assert!(text.contains("Site A"));
    }
}
