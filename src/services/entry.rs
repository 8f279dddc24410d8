//! Entry service
//!
//! Business logic for the petty-cash list: validated appends, removing the
//! latest line, clearing everything, and the running total. Each mutation
//! reads the full table, changes it and writes the full table back.

use crate::audit::EntityType;
use crate::error::{PettyCashError, PettyCashResult};
use crate::models::{Amount, Entry, NewEntry};
use crate::storage::Storage;

use super::ordering::{checked_total, OrderedEntries};

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append one entry
    pub fn add(&self, input: NewEntry) -> PettyCashResult<Entry> {
        let entry = input
            .into_entry()
            .map_err(|e| PettyCashError::Validation(e.to_string()))?;

        let mut entries = self.storage.entries().read_all()?;
        entries.push(entry.clone());
        checked_total(entries.iter().map(|e| e.amount)).map_err(|_| {
            PettyCashError::Validation(format!(
                "Amount {} would push the running total out of range",
                entry.amount
            ))
        })?;
        self.storage.entries().write_all(&entries)?;

        self.storage.log_create(
            EntityType::Entry,
            format!("entry-{}", entries.len()),
            Some(entry.description.clone()),
            &entry,
        )?;

        Ok(entry)
    }

    /// Remove the most recently added entry, if any
    pub fn remove_last(&self) -> PettyCashResult<Option<Entry>> {
        let mut entries = self.storage.entries().read_all()?;
        let position = entries.len();

        let Some(removed) = entries.pop() else {
            return Ok(None);
        };
        self.storage.entries().write_all(&entries)?;

        self.storage.log_delete(
            EntityType::Entry,
            format!("entry-{}", position),
            Some(removed.description.clone()),
            &removed,
        )?;

        Ok(Some(removed))
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&self) -> PettyCashResult<usize> {
        let entries = self.storage.entries().read_all()?;
        self.storage.entries().write_all(&[])?;

        if !entries.is_empty() {
            self.storage.log_clear(EntityType::Entry, &entries)?;
        }

        Ok(entries.len())
    }

    /// All entries in insertion order
    pub fn list(&self) -> PettyCashResult<Vec<Entry>> {
        self.storage.entries().read_all()
    }

    /// Signed sum of all entries
    pub fn total(&self) -> PettyCashResult<Amount> {
        checked_total(self.list()?.iter().map(|e| e.amount))
    }

    /// Entries sorted by date for `year`, with location codes
    pub fn ordered(&self, year: i32) -> PettyCashResult<OrderedEntries> {
        Ok(OrderedEntries::prepare(&self.list()?, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::models::SignPolicy;
    use crate::storage::{JsonTableStore, Storage};
    use tempfile::TempDir;

    fn new_entry(date: &str, description: &str, amount: i64, location: &str) -> NewEntry {
        NewEntry {
            date: date.into(),
            description: description.into(),
            amount: Some(Amount::new(amount)),
            location: location.into(),
            sign: SignPolicy::AsEntered,
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::with_store(Box::new(JsonTableStore::new(
            temp_dir.path().join("entries.json"),
        )))
        .with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_list() {
        let storage = Storage::in_memory();
        let service = EntryService::new(&storage);

        service.add(new_entry("01/05", "Lunch", -100, "Site A")).unwrap();
        service.add(new_entry("01/03", "Nails", -50, "Site B")).unwrap();

        let entries = service.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Lunch");
        assert_eq!(entries[1].description, "Nails");
        assert_eq!(service.total().unwrap(), Amount::new(-150));
    }

    #[test]
    fn test_add_missing_field_appends_nothing() {
        let storage = Storage::in_memory();
        let service = EntryService::new(&storage);
        service.add(new_entry("01/05", "Lunch", -100, "Site A")).unwrap();

        let err = service.add(new_entry("01/06", "Taxi", -300, "  ")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Location is required");
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let storage = Storage::in_memory();
        let service = EntryService::new(&storage);
        let huge = Amount::parse("9,000,000,000,000,000,000").unwrap();

        let mut first = new_entry("01/01", "Deposit", 0, "HQ");
        first.amount = Some(huge);
        service.add(first.clone()).unwrap();

        let err = service.add(first).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("out of range"));
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(service.total().unwrap(), huge);
    }

    #[test]
    fn test_total_of_oversized_table_is_an_error() {
        let storage = Storage::in_memory();
        let huge = Amount::parse("9,000,000,000,000,000,000").unwrap();
        storage
            .entries()
            .write_all(&[
                Entry::new("01/01", "Deposit", huge, "HQ"),
                Entry::new("01/02", "Deposit", huge, "HQ"),
            ])
            .unwrap();

        let service = EntryService::new(&storage);
        assert!(service.total().unwrap_err().is_validation());
    }

    #[test]
    fn test_remove_last() {
        let storage = Storage::in_memory();
        let service = EntryService::new(&storage);

        assert!(service.remove_last().unwrap().is_none());

        service.add(new_entry("01/05", "Lunch", -100, "Site A")).unwrap();
        service.add(new_entry("01/06", "Taxi", -300, "Site B")).unwrap();

        let removed = service.remove_last().unwrap().unwrap();
        assert_eq!(removed.description, "Taxi");
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_resets_codes() {
        let storage = Storage::in_memory();
        let service = EntryService::new(&storage);

        service.add(new_entry("01/01", "a", -1, "First")).unwrap();
        service.add(new_entry("01/02", "b", -1, "Second")).unwrap();
        assert_eq!(service.clear().unwrap(), 2);
        assert!(service.list().unwrap().is_empty());
        assert_eq!(service.clear().unwrap(), 0);

        service.add(new_entry("01/03", "c", -1, "Second")).unwrap();
        let ordered = service.ordered(2025).unwrap();
        assert_eq!(ordered.codes().code_for("Second").unwrap().as_str(), "A");
        assert!(ordered.codes().code_for("First").is_none());
    }

    #[test]
    fn test_mutations_persist_and_are_audited() {
        let (temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);

        service.add(new_entry("01/05", "Lunch", -100, "Site A")).unwrap();
        service.add(new_entry("01/06", "Taxi", -300, "Site B")).unwrap();
        service.remove_last().unwrap();
        service.clear().unwrap();

        let reopened = JsonTableStore::new(temp_dir.path().join("entries.json"));
        assert!(crate::storage::EntryStore::read_all(&reopened)
            .unwrap()
            .is_empty());

        let log = storage.audit().unwrap().read_all().unwrap();
        let ops: Vec<_> = log.iter().map(|e| e.operation).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Create,
                Operation::Create,
                Operation::Delete,
                Operation::Clear
            ]
        );
        assert_eq!(log[1].entity_id, "entry-2");
        assert_eq!(log[2].entity_id, "entry-2");
    }

    #[test]
    fn test_every_add_rereads_the_table() {
        let (temp_dir, storage) = create_test_storage();
        let service = EntryService::new(&storage);
        service.add(new_entry("01/05", "Lunch", -100, "Site A")).unwrap();

        // Another writer replaces the table behind our back
        let other = JsonTableStore::new(temp_dir.path().join("entries.json"));
        crate::storage::EntryStore::write_all(
            &other,
            &[Entry::new("02/01", "Outside edit", -1, "HQ")],
        )
        .unwrap();

        service.add(new_entry("02/02", "Tape", -30, "HQ")).unwrap();
        let descriptions: Vec<_> = service
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(descriptions, vec!["Outside edit", "Tape"]);
    }
}
