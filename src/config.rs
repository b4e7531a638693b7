use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::storage::{DEFAULT_LATENCY_MS, Latency};
use crate::todo::DEFAULT_UPCOMING_WINDOW_DAYS;
use crate::utils::paths::get_config_path;

/// Where the stores get their initial records from
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Start from the bundled dataset; otherwise only the inbox exists
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    #[serde(default)]
    pub seed: SeedConfig,
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_WINDOW_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            upcoming_days: default_upcoming_days(),
            seed: SeedConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Reads a config file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.latency_ms)
    }
}
