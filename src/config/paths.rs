//! Path management for Budget Boards
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_BOARDS_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-boards` or `~/.config/budget-boards`
//! 3. Windows: `%APPDATA%\budget-boards`

use std::path::PathBuf;

use crate::error::BoardsError;

/// Environment variable that overrides the base directory
pub const DIR_ENV: &str = "BUDGET_BOARDS_DIR";

/// Manages all paths used by Budget Boards
#[derive(Debug, Clone)]
pub struct BoardsPaths {
    base_dir: PathBuf,
}

impl BoardsPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BoardsError> {
        let base_dir = match std::env::var(DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory backing the key-value store (board snapshot, session)
    pub fn cache_dir(&self) -> PathBuf {
        self.base_dir.join("cache")
    }

    /// Append-only sync journal
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("journal.log")
    }

    /// Ensure the base and cache directories exist
    pub fn ensure_directories(&self) -> Result<(), BoardsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BoardsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.cache_dir())
            .map_err(|e| BoardsError::Io(format!("Failed to create cache directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BoardsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BoardsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-boards"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BoardsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BoardsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-boards"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.cache_dir(), temp_dir.path().join("cache"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.journal_file(), temp_dir.path().join("journal.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardsPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.cache_dir().exists());
    }
}
