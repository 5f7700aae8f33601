//! Planner configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use model_tokenomics::{DEFAULT_HORIZON_MONTHS, TABLE_HORIZON_MONTHS};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "PLANNER_CONFIG";

/// Config file used when `PLANNER_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "planner-config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project file (TOML or JSON)
    pub project_path: String,

    /// Directory for JSON outputs
    pub output_dir: String,

    /// Months covered by the unlock series
    pub horizon_months: u32,

    /// Months covered by the unlock table
    pub table_horizon_months: u32,

    /// Watch mode polling interval in seconds
    pub poll_interval_secs: u64,

    /// Write JSON outputs after each evaluation
    pub write_outputs: bool,
}

impl Config {
    /// Load configuration from `path`, or from `$PLANNER_CONFIG` /
    /// `planner-config.toml` when no path is given
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_string(),
            None => std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
        };
        let expanded = shellexpand::tilde(&config_path);

        let config_str = std::fs::read_to_string(expanded.as_ref())
            .context(format!("Failed to read config file: {}", config_path))?;

        let config: Config = toml::from_str(&config_str)
            .context("Failed to parse config TOML")?;

        Ok(config)
    }

    /// Create default configuration
    pub fn default_local() -> Self {
        Self {
            project_path: "tokenomics.toml".to_string(),
            output_dir: "out".to_string(),
            horizon_months: DEFAULT_HORIZON_MONTHS,
            table_horizon_months: TABLE_HORIZON_MONTHS,
            poll_interval_secs: 2,
            write_outputs: true,
        }
    }

    /// Write default config to file
    pub fn write_default(path: &str) -> Result<()> {
        let config = Self::default_local();
        let toml_str = toml::to_string_pretty(&config)
            .context("Failed to serialize config")?;

        std::fs::write(path, toml_str)
            .context(format!("Failed to write config to {}", path))?;

        log::info!("Created default config at {}", path);
        Ok(())
    }
}
