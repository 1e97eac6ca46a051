//! Configuration file support for vendor-risk.
//!
//! Provides YAML-based configuration through `vendor-risk.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{FilterCriteria, OutputFormat};
use crate::risk_assessment::policies::MAX_RISK_SCORE;
use crate::shared::error::RiskError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vendor-risk.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub high_risk_threshold: Option<i64>,
    pub fail_on_high_risk: Option<bool>,
    pub filters: Option<FilterCriteria>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format.parse::<OutputFormat>().map_err(|message| {
                    RiskError::InvalidConfig {
                        message,
                        hint: "Set 'format' to json, markdown or csv.".to_string(),
                    }
                    .into()
                })
            })
            .transpose()
    }

    /// The configured headline threshold, if any.
    pub fn high_risk_threshold(&self) -> Result<Option<u8>> {
        self.high_risk_threshold
            .map(|value| {
                u8::try_from(value)
                    .ok()
                    .filter(|v| *v <= MAX_RISK_SCORE)
                    .ok_or_else(|| {
                        RiskError::InvalidConfig {
                            message: format!(
                                "high_risk_threshold must be between 0 and {}, got {}",
                                MAX_RISK_SCORE, value
                            ),
                            hint: "Overall risk scores range from 1 to 25; vendors scoring above the threshold count as high risk.".to_string(),
                        }
                        .into()
                    })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and that filter values use the roster's labels (e.g. \"High\", \"AI Model Provider\").",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    log::debug!("Using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;
    config.high_risk_threshold()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        log::warn!("Unknown config field '{}' will be ignored", key);
    }
}
