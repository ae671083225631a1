use crate::config::{SheetsConfig, DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration:
///
/// ```toml
/// [sheets]
/// spreadsheet_id = "${PORTFOLIO_SPREADSHEET_ID}"
/// api_key = "${PORTFOLIO_API_KEY}"
///
/// [cache]
/// enabled = true
/// ttl_seconds = 300
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sheets: SheetsSection,
    pub cache: Option<CacheSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsSection {
    pub spreadsheet_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSection {
    pub enabled: Option<bool>,
    pub ttl_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unset
    /// variables resolve to the empty string, which keeps absent credentials
    /// on the fallback path instead of sending a literal placeholder to the
    /// API.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                String::new()
            })
        })
        .to_string()
    }

    pub fn into_config(self) -> Result<SheetsConfig> {
        let cache = self.cache.unwrap_or(CacheSection {
            enabled: None,
            ttl_seconds: None,
        });

        let config = SheetsConfig {
            spreadsheet_id: self.sheets.spreadsheet_id.unwrap_or_default(),
            api_key: self.sheets.api_key.unwrap_or_default(),
            base_url: self
                .sheets
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_enabled: cache.enabled.unwrap_or(true),
            cache_ttl_seconds: cache.ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECS),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[sheets]
spreadsheet_id = "sheet-123"
api_key = "key-456"

[cache]
enabled = true
ttl_seconds = 120
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config.spreadsheet_id, "sheet-123");
        assert_eq!(config.api_key, "key-456");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_seconds, 120);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let toml_content = r#"
[sheets]
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_config()
            .unwrap();

        assert!(!config.has_credentials());
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_seconds, DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_PORTFOLIO_SHEET", "sheet-from-env");

        let toml_content = r#"
[sheets]
spreadsheet_id = "${TEST_PORTFOLIO_SHEET}"
api_key = "${TEST_PORTFOLIO_UNSET_VAR}"
"#;

        let parsed = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(parsed.sheets.spreadsheet_id.as_deref(), Some("sheet-from-env"));
        // Unset variables become empty, which keeps fallback mode active.
        assert_eq!(parsed.sheets.api_key.as_deref(), Some(""));

        std::env::remove_var("TEST_PORTFOLIO_SHEET");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let toml_content = r#"
[sheets]
base_url = "not-a-url"
"#;

        let result = TomlConfig::from_toml_str(toml_content).unwrap().into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[sheets]
spreadsheet_id = "file-sheet"
api_key = "file-key"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path())
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.spreadsheet_id, "file-sheet");
    }
}
