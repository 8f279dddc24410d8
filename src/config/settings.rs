//! User settings for pettycash
//!
//! Manages the storage backend choice, report layout preferences and the
//! list of suggested location names.

use serde::{Deserialize, Serialize};

use super::paths::PettyCashPaths;
use crate::error::PettyCashError;

/// Default number of entries per printed half-page column
pub const DEFAULT_COLUMN_CAPACITY: usize = 28;

/// Largest accepted column capacity; an A4 half-page holds far fewer rows
pub const MAX_COLUMN_CAPACITY: usize = 200;

/// Which tabular store mirrors the entry list on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// JSON document (default)
    #[default]
    Json,
    /// CSV table with fixed columns
    Csv,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Json => write!(f, "json"),
            StoreBackend::Csv => write!(f, "csv"),
        }
    }
}

/// User settings for pettycash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Backing table format
    #[serde(default)]
    pub store_backend: StoreBackend,

    /// Entries per printed column before the next column (or page) starts
    #[serde(default = "default_column_capacity")]
    pub column_capacity: usize,

    /// Currency symbol shown before totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Title printed at the top of every report page
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Organization name for the report metadata line
    #[serde(default)]
    pub organization: String,

    /// Page margin in millimetres (all four sides)
    #[serde(default = "default_page_margin_mm")]
    pub page_margin_mm: u32,

    /// Suggested location names offered when adding entries
    #[serde(default)]
    pub location_suggestions: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_column_capacity() -> usize {
    DEFAULT_COLUMN_CAPACITY
}

fn default_currency() -> String {
    "NT$".to_string()
}

fn default_report_title() -> String {
    "Petty Cash Statement".to_string()
}

fn default_page_margin_mm() -> u32 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            store_backend: StoreBackend::default(),
            column_capacity: default_column_capacity(),
            currency_symbol: default_currency(),
            report_title: default_report_title(),
            organization: String::new(),
            page_margin_mm: default_page_margin_mm(),
            location_suggestions: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PettyCashPaths) -> Result<Self, PettyCashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PettyCashError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PettyCashError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PettyCashPaths) -> Result<(), PettyCashError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PettyCashError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PettyCashError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the report layout cannot work with
    pub fn validate(&self) -> Result<(), PettyCashError> {
        if !(1..=MAX_COLUMN_CAPACITY).contains(&self.column_capacity) {
            return Err(PettyCashError::Config(format!(
                "column_capacity must be between 1 and {}, got {}",
                MAX_COLUMN_CAPACITY, self.column_capacity
            )));
        }
        Ok(())
    }
}
