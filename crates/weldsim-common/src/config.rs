//! ---
//! wms_section: "01-core-functionality"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Runtime configuration loading for the generator CLI."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;
use crate::time::StartTime;

fn default_records() -> u64 {
    7500
}

fn default_interval_seconds() -> f64 {
    5.0
}

/// Primary configuration object for a generation run. Every field has a
/// default, so an absent or empty config file yields the stock run: 7500
/// records at 5-second intervals starting now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_records")]
    pub records: u64,
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: f64,
    #[serde(default)]
    pub start_time: StartTime,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging knobs. Filter directives come from `WELDSIM_LOG`/`RUST_LOG`
/// instead of the file, so only the output format lives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
            interval_seconds: default_interval_seconds(),
            start_time: StartTime::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SimConfig {
    pub const ENV_CONFIG_PATH: &'static str = "WELDSIM_CONFIG";

    /// Load configuration from disk, respecting the `WELDSIM_CONFIG` override.
    /// Falls back to defaults when none of the candidates exist.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            let path = PathBuf::from(env_path);
            return Self::from_path(&path);
        }
        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                return Self::from_path(path);
            }
        }
        debug!("no configuration file found; using defaults");
        Ok(Self::default())
    }

    /// Parse a single YAML config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
