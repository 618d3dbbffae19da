//! Configuration loading from environment.

use std::env;
use std::str::FromStr;

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format: {}. Supported: pretty, json", other),
        }
    }
}

/// Application configuration.
pub struct Config {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let log_filter = env::var("PIX_LOG").unwrap_or_else(|_| "info".to_string());

        let log_format = env::var("PIX_LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .parse()?;

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
