//! TOML configuration: station identity plus bridge endpoints.

use std::path::Path;

use serde::Deserialize;

use crate::types::ContestProfile;

/// Errors surfaced while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The file was not valid TOML or was missing required keys.
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Host/port pair for one side of the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoint {
    /// Host name or address.
    pub host: String,
    /// Port number.
    pub port: u16,
}

impl Endpoint {
    /// Renders `host:port` for socket APIs.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Station identity and contest defaults, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StationConfig {
    /// Operating call sign used unless the wire record overrides it.
    pub operator: String,
    /// Operator name sent with every QSO.
    pub name: String,
    /// Operator initials.
    #[serde(default)]
    pub initials: String,
    /// Station county.
    #[serde(default)]
    pub county: String,
    /// Default contest class sent.
    #[serde(default)]
    pub class: String,
    /// Default contest section sent.
    #[serde(default)]
    pub section: String,
    /// Active contest identifier, e.g. `"FD"`; empty for general logging.
    #[serde(default)]
    pub contest: String,
    /// Computer name reported to the logging server.
    #[serde(default)]
    pub computer_name: String,
}

impl StationConfig {
    /// Selects the command template for this session.
    pub fn profile(&self) -> ContestProfile {
        ContestProfile::from_contest_id(&self.contest)
    }
}

/// Full bridge configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Station identity and contest defaults.
    #[serde(flatten)]
    pub station: StationConfig,
    /// UDP endpoint the digital-mode application logs to.
    pub wsjtx: Endpoint,
    /// TCP endpoint of the N3FJP API server.
    pub n3fjp: Endpoint,
    /// Outbound connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Delay between the insert and refresh commands in milliseconds.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,
}

impl BridgeConfig {
    /// Loads and parses the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_refresh_delay_ms() -> u64 {
    200
}
