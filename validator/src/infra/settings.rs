//! Infrastructure implementation of the `SettingsStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::SettingsStore;
use crate::domain::settings::ValidatorSettings;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "FLUENTBIT_VALIDATOR_CONFIG";

/// Production implementation of `SettingsStore` that reads a YAML file.
#[derive(Debug, Default)]
pub struct YamlSettingsStore {
    explicit: Option<PathBuf>,
}

impl YamlSettingsStore {
    /// Store reading from `path` instead of the environment/default location.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<ValidatorSettings> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ValidatorSettings::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(SETTINGS_ENV) {
            return Ok(PathBuf::from(val));
        }
        let base =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("cannot determine config directory"))?;
        Ok(base.join("fluentbit-validator").join("settings.yaml"))
    }
}
