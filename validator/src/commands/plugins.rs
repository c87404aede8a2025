//! `fluentbit-validate plugins`: show the plugins a dry-run would load.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::settings_service;
use crate::commands::AgentArgs;

/// Arguments for the plugins command.
#[derive(Args, Debug)]
pub struct PluginsArgs {
    #[command(flatten)]
    pub agent: AgentArgs,
}

/// Run the plugins command.
///
/// # Errors
///
/// Returns an error if the settings cannot be resolved or the plugin
/// directory cannot be read.
pub fn run(app: &AppContext, args: &PluginsArgs) -> Result<ExitCode> {
    let settings = settings_service::resolve_settings(&app.settings_store, args.agent.overrides(None))?;
    let validator = app.validator(&settings);
    let plugins = validator.plugins()?;
    app.renderer()
        .render_plugins(validator.plugin_directory(), &plugins)?;
    Ok(ExitCode::SUCCESS)
}
