//! Audit logger for the append-only audit log
//!
//! One JSON object per line. A record is written with a single call so that
//! lines from concurrent invocations never interleave mid-record.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{PettyCashError, PettyCashResult};
use crate::storage::file_io::open_if_exists;

use super::entry::{AuditEntry, EntityType};

/// Appends audit records to, and reads them back from, a JSONL file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one record and flush
    pub fn log(&self, record: &AuditEntry) -> PettyCashResult<()> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| PettyCashError::Json(format!("Failed to serialize audit record: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PettyCashError::Io(format!("Failed to open audit log: {}", e)))?;

        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| PettyCashError::Io(format!("Failed to write audit log: {}", e)))
    }

    /// Read every record, oldest first
    pub fn read_all(&self) -> PettyCashResult<Vec<AuditEntry>> {
        let Some(reader) = open_if_exists(&self.log_path)? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                PettyCashError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let record = serde_json::from_str(&line).map_err(|e| {
                PettyCashError::Json(format!(
                    "Failed to parse audit record at line {}: {}",
                    index + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// The last `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> PettyCashResult<Vec<AuditEntry>> {
        self.read_recent_for(None, count)
    }

    /// The last `count` records, optionally only those about one kind of
    /// entity
    pub fn read_recent_for(
        &self,
        entity_type: Option<EntityType>,
        count: usize,
    ) -> PettyCashResult<Vec<AuditEntry>> {
        let mut records = self.read_all()?;
        if let Some(entity_type) = entity_type {
            records.retain(|r| r.entity_type == entity_type);
        }

        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
