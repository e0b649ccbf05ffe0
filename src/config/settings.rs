//! User settings for expense-ledger
//!
//! Stored as JSON next to the ledger data. Every field has a serde default
//! so older or hand-edited config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::parser::InvalidDatePolicy;

/// User settings for expense-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file name (without extension) under the data directory
    #[serde(default = "default_ledger_name")]
    pub ledger_name: String,

    /// Currency symbol used in replies and listings
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for the write-time stamp on undated entries
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Reject entries whose `DD/MM` prefix is not a real date
    /// instead of recording them under today's date
    #[serde(default)]
    pub strict_dates: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_name() -> String {
    "expenses".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_name: default_ledger_name(),
            currency_symbol: default_currency(),
            timestamp_format: default_timestamp_format(),
            strict_dates: false,
        }
    }
}

impl Settings {
    /// How the entry parser should treat unusable dates
    pub fn date_policy(&self) -> InvalidDatePolicy {
        if self.strict_dates {
            InvalidDatePolicy::Reject
        } else {
            InvalidDatePolicy::FallbackToToday
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), LedgerError> {
        let name = self.ledger_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(LedgerError::Config(format!(
                "Invalid ledger name: '{}'",
                self.ledger_name
            )));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(LedgerError::Config("Timestamp format must not be empty".into()));
        }
        Ok(())
    }
}
