//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fluentbit_validator::app::{AppContext, AppFlags};
use fluentbit_validator::commands;

/// Pre-flight validation of Fluent Bit configuration
#[derive(Parser)]
#[command(
    name = "fluentbit-validate",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Settings file (default: $FLUENTBIT_VALIDATOR_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Dry-run configuration files through Fluent Bit
    Validate(commands::validate::ValidateArgs),

    /// List the plugins passed to Fluent Bit with `-e`
    Plugins(commands::plugins::PluginsArgs),

    /// Extract the error description from captured dry-run output
    Extract(commands::extract::ExtractArgs),
}

impl Cli {
    /// Flags shared by every command.
    #[must_use]
    pub fn flags(&self) -> AppFlags {
        AppFlags {
            no_color: self.no_color,
            quiet: self.quiet,
            json: self.json,
            settings: self.settings.clone(),
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails before producing a result.
    pub async fn run(self) -> Result<ExitCode> {
        let app = AppContext::new(&self.flags());
        match self.command {
            Command::Validate(args) => commands::validate::run(&app, args).await,
            Command::Plugins(args) => commands::plugins::run(&app, &args),
            Command::Extract(args) => commands::extract::run(&app, &args).await,
        }
    }
}
