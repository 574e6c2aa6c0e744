use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Optional settings read from `config.toml`.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// poll_interval_secs = 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// WeatherAPI.com key, used when none is given on the command line.
    pub api_key: Option<String>,

    /// Seconds between iterations in watch mode.
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_key: None, poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS }
    }
}

impl Config {
    /// Load config from the platform config directory, or return defaults if
    /// the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        debug!(path = %path.display(), "resolved config path");

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherwatch", "weatherwatch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configured API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}
