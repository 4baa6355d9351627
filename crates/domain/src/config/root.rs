use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::host::HostConfig;
use super::logging::LoggingConfig;
use super::metric::MetricConfig;
use super::ntopng::NtopngConfig;
use crate::SubnetAllowList;

const LOCAL_CONFIG_PATH: &str = "ntopng-exporter.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ntopng-exporter/config.toml";

/// Main configuration structure for ntopng-exporter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Appliance connection (endpoint, credentials, intervals)
    #[serde(default)]
    pub ntopng: NtopngConfig,

    /// Which interfaces to scrape
    #[serde(default)]
    pub host: HostConfig,

    /// Host filtering
    #[serde(default)]
    pub metric: MetricConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ntopng-exporter.toml in current directory
    /// 3. /etc/ntopng-exporter/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::parse(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.ntopng.endpoint = endpoint;
        }
        if let Some(interval) = overrides.scrape_interval {
            self.ntopng.scrape_interval = interval;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    ///
    /// Durations are checked by the components that consume them so that a
    /// bad scrape interval is reported as an interval error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.ntopng.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "ntopng endpoint cannot be empty".to_string(),
            ));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "ntopng endpoint must start with http:// or https://, got '{}'",
                endpoint
            )));
        }

        if self.host.interfaces_to_monitor.is_empty() {
            return Err(ConfigError::Validation(
                "No interfaces to monitor configured".to_string(),
            ));
        }

        SubnetAllowList::new(&self.metric.local_subnets_only)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub endpoint: Option<String>,
    pub scrape_interval: Option<String>,
    pub log_level: Option<String>,
}
