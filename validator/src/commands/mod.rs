//! Command implementations

pub mod extract;
pub mod plugins;
pub mod validate;

use std::path::PathBuf;

use clap::Args;

use crate::domain::settings::SettingsOverrides;

/// Agent location flags shared by commands that touch the agent install.
#[derive(Args, Debug, Default)]
pub struct AgentArgs {
    /// Fluent Bit executable used for the dry-run
    #[arg(long, env = "FLUENT_BIT_PATH", value_name = "PATH")]
    pub fluent_bit_path: Option<PathBuf>,

    /// Directory of external plugins passed with `-e`
    #[arg(long, value_name = "DIR")]
    pub plugin_dir: Option<PathBuf>,
}

impl AgentArgs {
    /// Convert to settings overrides, with an optional timeout.
    #[must_use]
    pub fn overrides(&self, timeout_secs: Option<u64>) -> SettingsOverrides {
        SettingsOverrides {
            fluent_bit_path: self.fluent_bit_path.clone(),
            plugin_directory: self.plugin_dir.clone(),
            timeout_secs,
        }
    }
}
