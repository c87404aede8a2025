//! Application service: settings use-cases.

use anyhow::Result;

use crate::application::ports::SettingsStore;
use crate::domain::settings::{SettingsOverrides, ValidatorSettings, validate_settings};

/// Load settings from `store`, apply command-line overrides, and validate.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or are invalid.
pub fn resolve_settings(
    store: &impl SettingsStore,
    overrides: SettingsOverrides,
) -> Result<ValidatorSettings> {
    let settings = overrides.apply(store.load()?);
    validate_settings(&settings)?;
    Ok(settings)
}
