//! Validator settings schema and validation.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::SettingsError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_FLUENT_BIT_PATH: &str = "fluent-bit/bin/fluent-bit";
pub const DEFAULT_PLUGIN_DIRECTORY: &str = "fluent-bit/lib";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Settings schema ──────────────────────────────────────────────────────────

/// Settings stored in `settings.yaml`. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// Path of the Fluent Bit executable used for dry-runs.
    pub fluent_bit_path: PathBuf,
    /// Directory whose files are loaded as external plugins (`-e`).
    pub plugin_directory: PathBuf,
    /// Upper bound on a single dry-run, in seconds.
    pub timeout_secs: u64,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            fluent_bit_path: PathBuf::from(DEFAULT_FLUENT_BIT_PATH),
            plugin_directory: PathBuf::from(DEFAULT_PLUGIN_DIRECTORY),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ValidatorSettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Overrides supplied on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub fluent_bit_path: Option<PathBuf>,
    pub plugin_directory: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl SettingsOverrides {
    /// Apply the overrides on top of `settings`.
    #[must_use]
    pub fn apply(self, mut settings: ValidatorSettings) -> ValidatorSettings {
        if let Some(path) = self.fluent_bit_path {
            settings.fluent_bit_path = path;
        }
        if let Some(dir) = self.plugin_directory {
            settings.plugin_directory = dir;
        }
        if let Some(secs) = self.timeout_secs {
            settings.timeout_secs = secs;
        }
        settings
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Reject settings that cannot produce a meaningful dry-run.
///
/// # Errors
///
/// Returns an error if the binary path is empty or the timeout is zero.
pub fn validate_settings(settings: &ValidatorSettings) -> Result<(), SettingsError> {
    if settings.fluent_bit_path.as_os_str().is_empty() {
        return Err(SettingsError::EmptyBinaryPath);
    }
    if settings.timeout_secs == 0 {
        return Err(SettingsError::ZeroTimeout);
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
