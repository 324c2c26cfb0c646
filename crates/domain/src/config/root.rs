use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-arp.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-arp/config.toml";

/// Main configuration structure for Ferrous ARP
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// External command configuration
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-arp.toml in current directory
    /// 3. /etc/ferrous-arp/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(secs) = overrides.command_timeout_secs {
            self.resolver.command_timeout_secs = Some(secs);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.ping_command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ping_command cannot be empty".to_string(),
            ));
        }

        if self.resolver.arp_command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "arp_command cannot be empty".to_string(),
            ));
        }

        if self.resolver.command_timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "command_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub command_timeout_secs: Option<u64>,
}
