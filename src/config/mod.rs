#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;

pub const SPREADSHEET_ID_VAR: &str = "PORTFOLIO_SPREADSHEET_ID";
pub const API_KEY_VAR: &str = "PORTFOLIO_API_KEY";

/// Settings for the Sheets adapter and the range cache.
///
/// Empty credentials are valid: they switch every read into fallback mode
/// without touching the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub api_key: String,
    pub base_url: String,
    pub cache_enabled: bool,
    pub cache_ttl_seconds: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_enabled: true,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl SheetsConfig {
    /// Read credentials from the environment, leaving everything else at its
    /// default. Missing variables resolve to empty strings (fallback mode).
    pub fn from_env() -> Self {
        Self {
            spreadsheet_id: std::env::var(SPREADSHEET_ID_VAR).unwrap_or_default(),
            api_key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.spreadsheet_id.is_empty() && !self.api_key.is_empty()
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Validate for SheetsConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        // Credentials may be absent, but a present one must not be blank.
        if !self.spreadsheet_id.is_empty() {
            validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        }
        if !self.api_key.is_empty() {
            validate_non_empty_string("api_key", &self.api_key)?;
        }

        if self.cache_enabled {
            validate_positive_number("cache_ttl_seconds", self.cache_ttl_seconds, 1)?;
        }

        Ok(())
    }
}
