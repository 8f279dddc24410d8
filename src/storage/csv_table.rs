//! CSV entry table
//!
//! Mirrors the entry list to a spreadsheet-style table with the fixed header
//! `date,description,amount,location`. The table is re-read on every access
//! and rewritten in full on every mutation.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, Entry};

use super::file_io::{open_if_exists, write_atomic};
use super::EntryStore;

/// Column order of the backing table
pub const TABLE_COLUMNS: [&str; 4] = ["date", "description", "amount", "location"];

/// A table row as typed by hand: every cell is text until checked
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    description: String,
    #[serde(default)]
    amount: String,
    location: String,
}

impl CsvRow {
    /// A blank amount cell counts as zero
    fn into_entry(self) -> Result<Entry, String> {
        let amount = if self.amount.is_empty() {
            Amount::zero()
        } else {
            Amount::parse(&self.amount).map_err(|e| e.to_string())?
        };
        Ok(Entry::new(self.date, self.description, amount, self.location))
    }
}

/// Entry store backed by a CSV file
pub struct CsvTableStore {
    path: PathBuf,
}

impl CsvTableStore {
    /// Create a store for the given file (the file need not exist yet)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing table
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl EntryStore for CsvTableStore {
    fn read_all(&self) -> PettyCashResult<Vec<Entry>> {
        let Some(reader) = open_if_exists(&self.path)? else {
            return Ok(Vec::new());
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (row, record) in rdr.deserialize::<CsvRow>().enumerate() {
            let entry = record
                .map_err(|e| e.to_string())
                .and_then(CsvRow::into_entry)
                .map_err(|e| {
                    PettyCashError::Storage(format!(
                        "Failed to parse row {} of {}: {}",
                        row + 1,
                        self.path.display(),
                        e
                    ))
                })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    fn write_all(&self, entries: &[Entry]) -> PettyCashResult<()> {
        write_atomic(&self.path, |writer| {
            let mut wtr = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);

            // Written explicitly so an empty table still carries its header
            wtr.write_record(TABLE_COLUMNS)?;
            for entry in entries {
                wtr.serialize(entry)?;
            }
            wtr.flush()?;
            Ok(())
        })
    }

    fn describe(&self) -> String {
        format!("csv table at {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> CsvTableStore {
        CsvTableStore::new(temp_dir.path().join("entries.csv"))
    }

    #[test]
    fn test_absent_table_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(store_in(&temp_dir).read_all().unwrap().is_empty());
    }

    #[test]
    fn test_zero_byte_and_header_only_tables_read_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(store.path(), "").unwrap();
        assert!(store.read_all().unwrap().is_empty());

        std::fs::write(store.path(), "date,description,amount,location\n").unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_produces_fixed_columns() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .write_all(&[Entry::new("01/05", "Lunch, two people", -1200, "Site A")])
            .unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "date,description,amount,location\n01/05,\"Lunch, two people\",-1200,Site A\n"
        );
    }

    #[test]
    fn test_empty_write_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.write_all(&[]).unwrap();
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "date,description,amount,location\n");
    }

    #[test]
    fn test_reads_table_edited_by_hand() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(
            store.path(),
            "date,description,amount,location\n01/03,Nails,-50,Site B\n01/04,Refill,2000,Office\n",
        )
        .unwrap();

        let entries = store.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount, Amount::new(-50));
        assert_eq!(entries[1].amount, Amount::new(2000));
        assert_eq!(entries[1].location, "Office");
    }

    #[test]
    fn test_malformed_amount_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(
            store.path(),
            "date,description,amount,location\n01/03,Nails,fifty,Site B\n",
        )
        .unwrap();

        let err = store.read_all().unwrap_err();
        assert!(matches!(err, PettyCashError::Storage(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_cells_are_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(
            store.path(),
            "date, description, amount, location
01/03, Nails , -50 , Site B
",
        )
        .unwrap();

        let entries = store.read_all().unwrap();
        assert_eq!(entries[0], Entry::new("01/03", "Nails", -50, "Site B"));
    }

    #[test]
    fn test_blank_amount_reads_as_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        std::fs::write(
            store.path(),
            "date,description,amount,location
01/03,Nails,,Site B
01/04,Tape,  ,HQ
01/05,Refill,\"1,500\",Office
",
        )
        .unwrap();

        let entries = store.read_all().unwrap();
        assert_eq!(entries[0].amount, Amount::zero());
        assert_eq!(entries[1].amount, Amount::zero());
        assert_eq!(entries[2].amount, Amount::new(1500));
    }
}
