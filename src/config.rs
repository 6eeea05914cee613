//! Daemon configuration
//!
//! Defaults alone produce a runnable daemon; a TOML file and CLI flags
//! override individual fields. The page title, heading, component viewport,
//! and the missing-bundle message are fixed and never configurable.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Directory holding the built frontend bundle. `index.html` inside it
    /// is the component document. Relative paths resolve against the
    /// process working directory.
    pub dist_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log filter, overridable via `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file.
    ///
    /// `None` yields the defaults. An explicit path that cannot be read or
    /// parsed is a startup error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
