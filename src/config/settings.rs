use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use super::defaults;

/// Top-level configuration for the Vigía visit logger.
/// Deserializes from a TOML configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "defaults::default_server_config")]
    pub server: ServerConfig,

    #[serde(default = "defaults::default_geo_config")]
    pub geo: GeoConfig,

    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: defaults::default_server_config(),
            geo: defaults::default_geo_config(),
            logging: defaults::default_logging_config(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::default_bind")]
    pub bind: String,

    /// IANA zone used for the server-side timestamp of every record.
    #[serde(default = "defaults::default_server_timezone")]
    pub timezone: String,

    /// Query parameter that switches the response to the plain-text debug view.
    #[serde(default = "defaults::default_debug_param")]
    pub debug_param: String,
}

/// Outbound IP-geolocation API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    #[serde(default = "defaults::default_geo_base_url")]
    pub base_url: String,

    #[serde(default = "defaults::default_geo_timeout_ms")]
    pub timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    pub level: String,

    #[serde(default = "defaults::default_log_file")]
    pub file: String,

    /// Append-only file that receives one text block per visit.
    #[serde(default = "defaults::default_visit_log")]
    pub visit_log: String,
}
