//! User settings for Budget Boards
//!
//! Where the remote service lives, how long to wait for it, and display
//! preferences.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::BoardsPaths;
use crate::error::BoardsError;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "BUDGET_BOARDS_API_URL";

/// User settings for Budget Boards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the remote service, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether mutations are recorded in the sync journal
    #[serde(default = "default_journal_enabled")]
    pub journal_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_journal_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_timeout_secs(),
            currency_symbol: default_currency(),
            journal_enabled: default_journal_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist.
    /// `BUDGET_BOARDS_API_URL` takes precedence over the stored URL.
    pub fn load_or_create(paths: &BoardsPaths) -> Result<Self, BoardsError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BoardsError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents).map_err(|e| {
                BoardsError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            Settings::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                settings.api_base_url = url;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BoardsPaths) -> Result<(), BoardsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BoardsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BoardsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), BoardsError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BoardsError::Config(format!(
                "api_base_url must start with http:// or https:// (got '{}')",
                url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(BoardsError::Config(
                "request_timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:8000");
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(settings.journal_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "https://api.example.com".into();
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let contents = std::fs::read_to_string(paths.settings_file()).unwrap();
        let loaded: Settings = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded.api_base_url, "https://api.example.com");
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.request_timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.api_base_url = "localhost:8000".into();
        assert!(matches!(settings.validate(), Err(BoardsError::Config(_))));

        let mut settings = Settings::default();
        settings.request_timeout_secs = 0;
        assert!(settings.validate().is_err());
    }
}
