//! Location suggestion service
//!
//! Keeps the operator's list of frequently used site names. When adding an
//! entry the location may be typed freely or picked from this list by its
//! 1-based position.

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{PettyCashError, PettyCashResult};
use crate::storage::Storage;

/// How the operator specified a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationChoice {
    /// Free text
    Text(String),
    /// 1-based index into the suggestion list
    Pick(usize),
}

/// Service for managing location suggestions
///
/// Changes are made to the borrowed settings; persisting them is up to the
/// caller.
pub struct LocationService<'a> {
    storage: &'a Storage,
    settings: &'a mut Settings,
}

impl<'a> LocationService<'a> {
    /// Create a new location service
    pub fn new(storage: &'a Storage, settings: &'a mut Settings) -> Self {
        Self { storage, settings }
    }

    /// Suggested locations in display order
    pub fn list(&self) -> &[String] {
        &self.settings.location_suggestions
    }

    /// Add a suggestion to the end of the list
    pub fn add(&mut self, name: &str) -> PettyCashResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PettyCashError::Validation(
                "Location name cannot be empty".into(),
            ));
        }

        if self.settings.location_suggestions.iter().any(|s| s == name) {
            return Err(PettyCashError::Duplicate {
                entity_type: "Location",
                identifier: name.to_string(),
            });
        }

        self.settings.location_suggestions.push(name.to_string());
        self.storage
            .log_create(EntityType::Location, name, None, &name)?;
        Ok(())
    }

    /// Remove a suggestion by name or by 1-based position
    pub fn remove(&mut self, identifier: &str) -> PettyCashResult<String> {
        let identifier = identifier.trim();
        let position = self
            .settings
            .location_suggestions
            .iter()
            .position(|s| s == identifier)
            .or_else(|| {
                identifier
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .filter(|&i| i < self.settings.location_suggestions.len())
            })
            .ok_or_else(|| PettyCashError::location_not_found(identifier))?;

        let removed = self.settings.location_suggestions.remove(position);
        self.storage
            .log_delete(EntityType::Location, removed.as_str(), None, &removed)?;
        Ok(removed)
    }

    /// Turn the operator's choice into a location name
    pub fn resolve(&self, choice: LocationChoice) -> PettyCashResult<String> {
        match choice {
            LocationChoice::Text(text) => Ok(text),
            LocationChoice::Pick(n) => n
                .checked_sub(1)
                .and_then(|i| self.settings.location_suggestions.get(i))
                .cloned()
                .ok_or_else(|| PettyCashError::location_not_found(format!("#{}", n))),
        }
    }
}
