//! Engine configuration
//!
//! Read from a TOML file, then overridden by environment variables
//! (a `.env` file is honoured). Every setting has a built-in default, so
//! running without a config file is fine.
//!
//! ```toml
//! [filters]
//! duplicate_names = "case_insensitive"
//! filters_file = "/var/lib/dashboard/filters.json"
//! log_level = "debug"
//! ```
//!
//! Author: AI-Generated
//! Created: 2026-10-17

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::filters::DuplicateNames;

pub const ENV_FILTERS_FILE: &str = "DASHBOARD_FILTERS_FILE";
pub const ENV_DUPLICATE_NAMES: &str = "DASHBOARD_DUPLICATE_NAMES";

/// Top-level TOML configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub filters: FiltersConfig,
}

/// `[filters]` section
#[derive(Debug, Clone, Deserialize)]
pub struct FiltersConfig {
    #[serde(default)]
    pub duplicate_names: DuplicateNames,
    #[serde(default)]
    pub filters_file: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            duplicate_names: DuplicateNames::default(),
            filters_file: None,
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Apply environment overrides. `lookup` is `std::env::var` in production.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup(ENV_FILTERS_FILE).filter(|v| !v.trim().is_empty()) {
            self.filters.filters_file = Some(PathBuf::from(file));
        }

        if let Some(policy) = lookup(ENV_DUPLICATE_NAMES).filter(|v| !v.trim().is_empty()) {
            self.filters.duplicate_names = policy
                .parse()
                .with_context(|| format!("Invalid {}", ENV_DUPLICATE_NAMES))?;
        }

        Ok(())
    }

    /// Reject settings serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        log_filter(&self.filters.log_level)?;
        Ok(())
    }
}

/// Parse a log level / filter directive (e.g. "debug", "dashboard_filters=trace").
pub fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: '{}'", level))
}

/// Resolve configuration: TOML file (if given), then `.env` + environment.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    dotenv::dotenv().ok();

    let mut config = match path {
        Some(p) => EngineConfig::load(p)?,
        None => EngineConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}
