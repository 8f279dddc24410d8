//! Entry model
//!
//! One petty-cash line item: when it happened, what it was for, how much and
//! at which site. Entries are never edited after they are appended.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::{Amount, SignPolicy};

/// A single petty-cash line item
///
/// `date` is free-form `MM/DD` text and is only interpreted when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Date as typed, normally `MM/DD`
    pub date: String,

    /// What the money was spent on
    pub description: String,

    /// Signed amount, negative for expenditures
    #[serde(default)]
    pub amount: Amount,

    /// Full site/location name
    pub location: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<Amount>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.into(),
            location: location.into(),
        }
    }

    /// Validate that every required field is present
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.date.trim().is_empty() {
            return Err(EntryValidationError::MissingDate);
        }
        if self.description.trim().is_empty() {
            return Err(EntryValidationError::MissingDescription);
        }
        if self.location.trim().is_empty() {
            return Err(EntryValidationError::MissingLocation);
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.date, self.description, self.amount, self.location
        )
    }
}

/// Raw operator input for a new entry
///
/// Fields are trimmed when converted into an [`Entry`]; a missing amount
/// counts as zero.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: String,
    pub description: String,
    pub amount: Option<Amount>,
    pub location: String,
    pub sign: SignPolicy,
}

impl NewEntry {
    /// Build the entry that will be stored
    pub fn into_entry(self) -> Result<Entry, EntryValidationError> {
        let amount = self.sign.apply(self.amount.unwrap_or_default());
        let entry = Entry::new(
            self.date.trim(),
            self.description.trim(),
            amount,
            self.location.trim(),
        );
        entry.validate()?;
        Ok(entry)
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingDate,
    MissingDescription,
    MissingLocation,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryValidationError::MissingDate => write!(f, "Date is required"),
            EntryValidationError::MissingDescription => write!(f, "Description is required"),
            EntryValidationError::MissingLocation => write!(f, "Location is required"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, description: &str, location: &str) -> NewEntry {
        NewEntry {
            date: date.into(),
            description: description.into(),
            amount: Some(Amount::new(-100)),
            location: location.into(),
            sign: SignPolicy::AsEntered,
        }
    }

    #[test]
    fn test_valid_entry() {
        let entry = input(" 01/05 ", "Lunch ", " Site A").into_entry().unwrap();
        assert_eq!(entry, Entry::new("01/05", "Lunch", -100, "Site A"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            input("", "Lunch", "Site A").into_entry(),
            Err(EntryValidationError::MissingDate)
        );
        assert_eq!(
            input("01/05", "   ", "Site A").into_entry(),
            Err(EntryValidationError::MissingDescription)
        );
        assert_eq!(
            input("01/05", "Lunch", "").into_entry(),
            Err(EntryValidationError::MissingLocation)
        );
    }

    #[test]
    fn test_amount_defaults_to_zero() {
        let mut new_entry = input("01/05", "Lunch", "Site A");
        new_entry.amount = None;
        let entry = new_entry.into_entry().unwrap();
        assert!(entry.amount.is_zero());
    }

    #[test]
    fn test_sign_policy_applied() {
        let mut new_entry = input("01/05", "Refill", "Office");
        new_entry.amount = Some(Amount::new(500));
        new_entry.sign = SignPolicy::Expense;
        assert_eq!(new_entry.into_entry().unwrap().amount, Amount::new(-500));
    }

    #[test]
    fn test_serde_missing_amount() {
        let entry: Entry = serde_json::from_str(
            r#"{"date": "01/05", "description": "Lunch", "location": "Site A"}"#,
        )
        .unwrap();
        assert!(entry.amount.is_zero());
    }
}
