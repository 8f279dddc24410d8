//! Audit entry data structures
//!
//! Defines operation types, audited entity types and the record format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Something was added
    Create,
    /// One item was removed
    Delete,
    /// Everything of one kind was removed at once
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Entry,
    Location,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Entry => write!(f, "Entry"),
            EntityType::Location => write!(f, "Location"),
        }
    }
}

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Type of entity affected
    pub entity_type: EntityType,

    /// Position or key of the affected entity, e.g. `entry-3`
    pub entity_id: String,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON of what was there before (deletes and clears)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON of what is there after (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Record a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Record a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
        }
    }

    /// Record a clear-all operation, keeping everything that was removed
    pub fn clear<T: Serialize>(entity_type: EntityType, removed: &[T]) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Clear,
            entity_type,
            entity_id: "*".to_string(),
            entity_name: Some(format!("{} removed", removed.len())),
            before: serde_json::to_value(removed).ok(),
            after: None,
        }
    }

    /// Format the record for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(Operation::Clear.to_string(), "CLEAR");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"date": "01/05", "amount": -100});
        let entry = AuditEntry::create(
            EntityType::Entry,
            "entry-1",
            Some("Lunch".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_clear_entry_keeps_removed_items() {
        let removed = vec![json!({"n": 1}), json!({"n": 2})];
        let entry = AuditEntry::clear(EntityType::Entry, &removed);

        assert_eq!(entry.operation, Operation::Clear);
        assert_eq!(entry.entity_name.as_deref(), Some("2 removed"));
        assert_eq!(entry.before, Some(json!([{"n": 1}, {"n": 2}])));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::delete(
            EntityType::Location,
            "North Yard",
            None,
            &json!("North Yard"),
        );
        let text = entry.format_human_readable();
        assert!(text.contains("DELETE Location North Yard"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(EntityType::Entry, "entry-1", None, &json!({}));
        let text = serde_json::to_string(&entry).unwrap();
        assert!(!text.contains("before"));
        assert!(!text.contains("entity_name"));
        assert!(text.contains("\"operation\":\"create\""));
    }
}
