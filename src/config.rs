use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::TranscriptError;
use crate::fetch::{FetchConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Settings loaded from `~/.config/transcripts/config.toml`. Every field is
/// optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<f64>,
    /// Pause between successive requests in seconds.
    #[serde(default)]
    pub delay_secs: Option<f64>,
}

/// Command-line values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<f64>,
    pub delay_secs: Option<f64>,
}

/// Effective settings for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fetch: FetchConfig,
    pub delay: Duration,
}

pub fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join("transcripts").join("config.toml"))
}

/// Load the config file.
///
/// An explicit path must exist; the default location is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(TranscriptError::ConfigNotFound(path.to_path_buf()).into());
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse(&data).with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn parse(data: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(data).map_err(|err| TranscriptError::Config(err.to_string()))?;
    Ok(config)
}

impl Config {
    /// Merge CLI overrides over file values over built-in defaults.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings> {
        let user_agent = overrides
            .user_agent
            .clone()
            .or_else(|| self.user_agent.clone())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let timeout_secs = overrides
            .timeout_secs
            .or(self.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let delay_secs = overrides
            .delay_secs
            .or(self.delay_secs)
            .unwrap_or(DEFAULT_DELAY_SECS);

        let timeout = seconds("timeout", timeout_secs)?;
        if timeout.is_zero() {
            return Err(TranscriptError::Config("timeout must be positive".to_string()).into());
        }

        Ok(Settings {
            fetch: FetchConfig {
                user_agent,
                timeout,
            },
            delay: seconds("delay", delay_secs)?,
        })
    }
}

fn seconds(name: &str, value: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        TranscriptError::Config(format!("{} must be a non-negative number, got {}", name, value))
            .into()
    })
}
