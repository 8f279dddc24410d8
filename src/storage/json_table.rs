//! JSON entry table
//!
//! Mirrors the entry list to `entries.json`. Every read goes to disk and
//! every write replaces the whole document.

use std::path::PathBuf;

use crate::error::PettyCashResult;
use crate::models::Entry;

use super::file_io::{read_json, write_json_atomic};
use super::EntryStore;

/// Serializable table layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct EntryData {
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Entry store backed by a JSON document
pub struct JsonTableStore {
    path: PathBuf,
}

impl JsonTableStore {
    /// Create a store for the given file (the file need not exist yet)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl EntryStore for JsonTableStore {
    fn read_all(&self) -> PettyCashResult<Vec<Entry>> {
        let data: EntryData = read_json(&self.path)?;
        Ok(data.entries)
    }

    fn write_all(&self, entries: &[Entry]) -> PettyCashResult<()> {
        let data = EntryData {
            entries: entries.to_vec(),
        };
        write_json_atomic(&self.path, &data)
    }

    fn describe(&self) -> String {
        format!("json table at {}", self.path.display())
    }
}
