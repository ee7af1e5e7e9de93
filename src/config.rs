//! Optional TOML configuration: default parameters, logging and output paths.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Error, Result};
use crate::params::OptimizationParameters;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parameters: OptimizationParameters,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::ReadConfig)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(Error::ParseConfig)
    }
}

/// Logging configuration. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Installs the global tracing subscriber. Logs go to stderr so stdout holds only the report.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the chart PNG is written.
    pub chart: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart: Some(PathBuf::from("solution.png")),
        }
    }
}
