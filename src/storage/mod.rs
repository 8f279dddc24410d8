//! Storage layer for pettycash
//!
//! The entry list lives behind the [`EntryStore`] trait so the same services
//! run against memory, a JSON document or a CSV table. Stores are never
//! cached: every operation reads the whole table and every mutation writes
//! the whole table back.
//!
//! There is no locking between processes. Two writers racing on the same
//! table can lose one of the updates.

pub mod csv_table;
pub mod file_io;
pub mod json_table;
pub mod memory;

pub use csv_table::CsvTableStore;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use json_table::JsonTableStore;
pub use memory::MemoryStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::PettyCashPaths;
use crate::config::settings::{Settings, StoreBackend};
use crate::error::PettyCashResult;
use crate::models::Entry;

/// A full-table store for the ordered entry list
pub trait EntryStore {
    /// Read the whole table in insertion order; an absent or empty table
    /// reads as no entries
    fn read_all(&self) -> PettyCashResult<Vec<Entry>>;

    /// Replace the whole table
    fn write_all(&self, entries: &[Entry]) -> PettyCashResult<()>;

    /// Short human-readable description of where entries live
    fn describe(&self) -> String;
}

/// Storage coordinator: the entry table plus the audit log
///
/// This is the application state handed by reference to every service and
/// command handler.
pub struct Storage {
    entries: Box<dyn EntryStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the on-disk store selected in settings
    pub fn new(paths: &PettyCashPaths, settings: &Settings) -> PettyCashResult<Self> {
        paths.ensure_directories()?;

        let entries: Box<dyn EntryStore> = match settings.store_backend {
            StoreBackend::Json => Box::new(JsonTableStore::new(paths.entries_json_file())),
            StoreBackend::Csv => Box::new(CsvTableStore::new(paths.entries_csv_file())),
        };

        Ok(Self {
            entries,
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Wrap an arbitrary store without an audit log
    pub fn with_store(entries: Box<dyn EntryStore>) -> Self {
        Self {
            entries,
            audit: None,
        }
    }

    /// Purely in-memory storage
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The entry table
    pub fn entries(&self) -> &dyn EntryStore {
        self.entries.as_ref()
    }

    /// The audit logger, if this storage keeps one
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Log a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PettyCashResult<()> {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> PettyCashResult<()> {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Log a clear-all operation
    pub fn log_clear<T: Serialize>(
        &self,
        entity_type: EntityType,
        removed: &[T],
    ) -> PettyCashResult<()> {
        self.log(AuditEntry::clear(entity_type, removed))
    }

    fn log(&self, entry: AuditEntry) -> PettyCashResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }
}
