//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::bot::BotConfig;
use super::defaults::{default_description, default_server_flags};
use super::links::UplinkConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Jupe server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Our server identity.
    pub server: ServerConfig,
    /// The hub we link to.
    pub uplink: UplinkConfig,
    /// Optional service bot. Absent means no bot.
    pub bot: Option<BotConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// The bot block, if the bot should be introduced.
    pub fn enabled_bot(&self) -> Option<&BotConfig> {
        self.bot.as_ref().filter(|bot| bot.enabled)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name (e.g., "changeme.localhost").
    pub name: String,
    /// Server numeric, 0 through 4095.
    pub numeric: u16,
    /// Server description, also returned by INFO.
    #[serde(default = "default_description")]
    pub description: String,
    /// SERVER line flags. Never empty: a bare `+` is the minimum.
    #[serde(default = "default_server_flags")]
    pub flags: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
name = "jupe.example.net"
numeric = 12

[uplink]
hostname = "127.0.0.1"
password = "linkpass"

[bot]
salt = "pepper"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.name, "jupe.example.net");
        assert_eq!(config.server.numeric, 12);
        assert_eq!(config.server.flags, "+s");
        assert_eq!(config.uplink.port, 4400);
        assert_eq!(config.uplink.address(), "127.0.0.1:4400");
        assert!(config.enabled_bot().is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/jupeserv.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_disabled_bot() {
        let config: Config = toml::from_str(
            r#"
[server]
name = "jupe.example.net"
numeric = 0

[uplink]
hostname = "hub"
password = "x"

[bot]
enabled = false
salt = "x"
"#,
        )
        .unwrap();
        assert!(config.bot.is_some());
        assert!(config.enabled_bot().is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = toml::from_str::<Config>("[server]\nname = 3").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
