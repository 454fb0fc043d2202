//! Configuration loading
//!
//! Layers, lowest to highest priority:
//! 1. Built-in defaults
//! 2. Config file (`calc.toml` in the working directory, or `--config <path>`)
//! 3. Environment variables prefixed `CALC_`
//!
//! Command line flags are applied on top by the caller.

use anyhow::{bail, Context, Result};
use calculator::OutputMode;
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "calc.toml";

/// Environment variable prefix (`CALC_MODE`, `CALC_LOG_LEVEL`, `CALC_JSON`)
pub const ENV_PREFIX: &str = "CALC_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Output mode for arithmetic results
    #[serde(default)]
    pub mode: OutputMode,

    /// Log filter directive (e.g. "warn", "debug", "calculator=trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit one JSON object per result instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            log_level: default_log_level(),
            json: false,
        }
    }
}

impl CalcConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// An explicit `path` must exist; the default `calc.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::figment(path)?
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to load configuration")
    }

    /// Defaults plus file layer, without the environment
    fn figment(path: Option<&Path>) -> Result<Figment> {
        let figment = Figment::from(Serialized::defaults(CalcConfig::default()));

        let Some(path) = path else {
            return Ok(figment.merge(Toml::file(DEFAULT_CONFIG_FILE)));
        };

        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        Ok(match ext.as_str() {
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            "toml" => figment.merge(Toml::file(path)),
            other => bail!(
                "Unsupported config format '{}': expected .toml, .yaml or .yml",
                other
            ),
        })
    }
}
