//! `fluentbit-validate validate`: dry-run one or more configuration files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use tokio_util::sync::CancellationToken;

use crate::app::AppContext;
use crate::application::ports::ExecContext;
use crate::application::services::config_validator::ConfigValidator;
use crate::application::services::settings_service;
use crate::commands::AgentArgs;
use crate::domain::FileReport;
use crate::output::progress;

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Fluent Bit configuration files to check
    #[arg(required = true, value_name = "CONFIG")]
    pub configs: Vec<PathBuf>,

    #[command(flatten)]
    pub agent: AgentArgs,

    /// Upper bound for each dry-run, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Run the validate command.
///
/// Files are checked one at a time. Ctrl-C cancels the running dry-run and
/// skips the remaining files.
///
/// # Errors
///
/// Returns an error if the settings cannot be resolved or output fails.
pub async fn run(app: &AppContext, args: ValidateArgs) -> Result<ExitCode> {
    let settings = settings_service::resolve_settings(
        &app.settings_store,
        args.agent.overrides(args.timeout),
    )?;
    let validator = app.validator(&settings);

    let cancel = CancellationToken::new();
    let ctx = ExecContext::new(cancel.clone()).with_timeout(settings.timeout());
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut reports = Vec::with_capacity(args.configs.len());
    for config in &args.configs {
        let spinner = app
            .show_progress()
            .then(|| progress::spinner(&format!("Validating {}", config.display())));
        let outcome = validator.validate(&ctx, config).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        reports.push(FileReport::from_outcome(config, &outcome));
        if ctx.cancel.is_cancelled() {
            break;
        }
    }
    interrupt.abort();

    app.renderer().render_reports(&reports)?;
    if reports.iter().all(|r| r.valid) && reports.len() == args.configs.len() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
