use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryDefaults;

/// Main configuration structure for mquery
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query session defaults (families, retransmission timing)
    #[serde(default)]
    pub query: QueryDefaults,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. mquery.toml in current directory
    /// 3. /etc/mquery/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("mquery.toml").exists() {
            Self::from_file("mquery.toml")?
        } else if std::path::Path::new("/etc/mquery/config.toml").exists() {
            Self::from_file("/etc/mquery/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_families();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        // An explicit family flag replaces the file's family selection
        // outright, so `-6` alone means v6-only regardless of the file.
        if overrides.ipv4 || overrides.ipv6 {
            self.query.ipv4 = overrides.ipv4;
            self.query.ipv6 = overrides.ipv6;
        }
        if let Some(period) = overrides.transmit_period_ms {
            self.query.transmit_period_ms = period;
        }
        if let Some(count) = overrides.transmit_count {
            self.query.transmit_count = count;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// IPv4 is the default transport when nothing enabled a family.
    fn normalize_families(&mut self) {
        if !self.query.ipv4 && !self.query.ipv6 {
            self.query.ipv4 = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.transmit_count == 0 {
            return Err(ConfigError::Validation(
                "transmit count cannot be 0".to_string(),
            ));
        }
        if self.query.transmit_period_ms == 0 {
            return Err(ConfigError::Validation(
                "transmit period cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub ipv4: bool,
    pub ipv6: bool,
    pub transmit_period_ms: Option<u64>,
    pub transmit_count: Option<u32>,
    pub log_level: Option<String>,
}
