//! Audit logging system for pettycash
//!
//! Records every append, removal and clear of entries (and changes to the
//! location suggestion list) in an append-only JSON-lines log.
//!
//! - `AuditEntry`: one record with timestamp, operation, entity information
//!   and before/after JSON.
//! - `AuditLogger`: appends records to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
