//! In-process entry table
//!
//! Keeps the entry list in memory only. Used by tests and for throwaway
//! sessions where nothing should touch the disk.

use std::sync::RwLock;

use crate::error::{PettyCashError, PettyCashResult};
use crate::models::Entry;

use super::EntryStore;

/// Entry store backed by a vector in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Vec<Entry>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            data: RwLock::new(entries),
        }
    }
}

impl EntryStore for MemoryStore {
    fn read_all(&self) -> PettyCashResult<Vec<Entry>> {
        let data = self.data.read().map_err(|e| {
            PettyCashError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    fn write_all(&self, entries: &[Entry]) -> PettyCashResult<()> {
        let mut data = self.data.write().map_err(|e| {
            PettyCashError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = entries.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
