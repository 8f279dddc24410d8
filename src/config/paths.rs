//! Path management for pettycash
//!
//! Provides XDG-compliant path resolution for configuration, the entry table,
//! the audit log and generated reports.
//!
//! ## Path Resolution Order
//!
//! 1. `PETTYCASH_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pettycash` or `~/.config/pettycash`
//! 3. Windows: `%APPDATA%\pettycash`

use std::path::PathBuf;

use crate::error::PettyCashError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PETTYCASH_DATA_DIR";

/// Manages all paths used by pettycash
#[derive(Debug, Clone)]
pub struct PettyCashPaths {
    /// Base directory for all pettycash data
    base_dir: PathBuf,
}

impl PettyCashPaths {
    /// Create a new PettyCashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PettyCashError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PettyCashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/pettycash/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/pettycash/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default output directory for printable reports
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the JSON entry table
    pub fn entries_json_file(&self) -> PathBuf {
        self.data_dir().join("entries.json")
    }

    /// Get the path to the CSV entry table
    pub fn entries_csv_file(&self) -> PathBuf {
        self.data_dir().join("entries.csv")
    }

    /// Ensure the base, data and reports directories exist
    pub fn ensure_directories(&self) -> Result<(), PettyCashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PettyCashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PettyCashError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir()).map_err(|e| {
            PettyCashError::Io(format!("Failed to create reports directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if pettycash has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PettyCashError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PettyCashError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pettycash"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PettyCashError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PettyCashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pettycash"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PettyCashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.reports_dir(), temp_dir.path().join("reports"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = PettyCashPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PettyCashPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.reports_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PettyCashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.entries_csv_file(),
            temp_dir.path().join("data").join("entries.csv")
        );
    }
}
