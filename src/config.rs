//! Application configuration file support.
//!
//! This module provides utilities for reading server and chart configuration
//! from TOML configuration files, with environment-variable overrides for
//! the bind address.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::MonthLabels;

/// Application configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub charts: ChartSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Chart rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Twelve abbreviated month names for the timeline chart, January
    /// first. Defaults to German (de-DE) abbreviations.
    #[serde(default)]
    pub month_labels: MonthLabels,
    /// Year used by chart endpoints when the request omits one.
    #[serde(default = "default_year")]
    pub default_year: i32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_year() -> i32 {
    2025
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            month_labels: MonthLabels::default(),
            default_year: default_year(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    /// Load configuration from the default location, falling back to
    /// built-in defaults when no file is present.
    ///
    /// Searches for `romo.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    pub fn from_default_location() -> anyhow::Result<Self> {
        let search_paths = vec![PathBuf::from("romo.toml"), PathBuf::from("../romo.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST` and `PORT` environment overrides on top of the file
    /// settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.charts.default_year, 2025);
        assert_eq!(config.charts.month_labels.label(1), "Jan");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[charts]
month_labels = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
default_year = 2024
"#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.charts.month_labels.label(5), "May");
        assert_eq!(config.charts.default_year, 2024);
    }

    #[test]
    fn test_partial_config_uses_serde_defaults() {
        let config: AppConfig = toml::from_str("[server]\nhost = \"::1\"\n").unwrap();
        assert_eq!(config.server.host, "::1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.charts.month_labels.label(3), "Mär");
    }
}
