//! `fluentbit-validate extract`: run the error extractor over captured output.
//!
//! Useful when a new Fluent Bit release changes its diagnostic format: paste
//! the dry-run output into a file (or pipe it in) and check what the
//! validator would report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::AsyncReadExt;

use crate::app::AppContext;
use crate::domain::extract::{extract_error, matching_pattern};

/// Arguments for the extract command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// File holding captured dry-run output (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Run the extract command. Exits non-zero when nothing could be extracted.
///
/// # Errors
///
/// Returns an error if the input cannot be read or output fails.
pub async fn run(app: &AppContext, args: &ExtractArgs) -> Result<ExitCode> {
    let text = match &args.input {
        Some(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("cannot read {}", path.display()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None => {
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .context("cannot read stdin")?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
    };

    let reason = extract_error(&text);
    let pattern = matching_pattern(&text);
    app.renderer().render_extraction(&reason, pattern)?;

    Ok(if reason.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
