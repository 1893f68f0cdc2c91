//! Configuration file support for skill-prune.
//!
//! Provides YAML-based configuration through `skill-prune.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::shared::error::PruneError;
use crate::shared::Result;
use crate::skill_graph::policies::CyclePolicy;

pub const CONFIG_FILENAME: &str = "skill-prune.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input: Option<String>,
    pub output: Option<String>,
    pub cycle_policy: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `cycle_policy`, `None` when the field is absent
    pub fn cycle_policy(&self) -> Result<Option<CyclePolicy>> {
        self.cycle_policy
            .as_deref()
            .map(|value| {
                CyclePolicy::from_str(value)
                    .map_err(|message| anyhow::Error::from(PruneError::Validation { message }))
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
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, value) in [("input", &config.input), ("output", &config.output)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(PruneError::Validation {
                message: format!(
                    "{} must not be empty.\n\n💡 Hint: Remove the field or give it a file path.",
                    field
                ),
            }
            .into());
        }
    }

    config.cycle_policy()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
