use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::{RegistryConfig, MAX_TTL};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "registry-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/registry-dns/config.toml";

/// Main configuration structure for the registry DNS server
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, fallback)
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry location and record TTL
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. registry-dns.toml in current directory
    /// 3. /etc/registry-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.registry_path {
            self.registry.path = path;
        }
        if let Some(ttl) = overrides.ttl {
            self.registry.ttl = ttl;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration. Any error here must keep the server from starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Registry path is required".to_string(),
            ));
        }

        if self.registry.ttl > MAX_TTL {
            return Err(ConfigError::Validation(format!(
                "TTL {} exceeds maximum of {}",
                self.registry.ttl, MAX_TTL
            )));
        }

        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<std::net::IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address: {}",
                self.server.bind_address
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub registry_path: Option<PathBuf>,
    pub ttl: Option<u32>,
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
