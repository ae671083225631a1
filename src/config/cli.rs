use crate::config::{toml_config::TomlConfig, SheetsConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-data")]
#[command(about = "Fetch portfolio content from a Google Sheet, with placeholder fallback")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Spreadsheet id (overrides config file and environment)")]
    pub spreadsheet_id: Option<String>,

    #[arg(long, help = "API key (overrides config file and environment)")]
    pub api_key: Option<String>,

    #[arg(long, help = "Sheets API base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Disable the in-memory range cache")]
    pub no_cache: bool,

    #[arg(long, help = "Cache TTL in seconds")]
    pub cache_ttl_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Resolve the effective config: TOML file (when given) or environment,
    /// then flag overrides on top.
    pub fn into_config(self) -> Result<SheetsConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_config()?,
            None => SheetsConfig::from_env(),
        };

        if let Some(spreadsheet_id) = self.spreadsheet_id {
            config.spreadsheet_id = spreadsheet_id;
        }
        if let Some(api_key) = self.api_key {
            config.api_key = api_key;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if self.no_cache {
            config.cache_enabled = false;
        }
        if let Some(ttl) = self.cache_ttl_seconds {
            config.cache_ttl_seconds = ttl;
        }

        config.validate()?;
        Ok(config)
    }
}
