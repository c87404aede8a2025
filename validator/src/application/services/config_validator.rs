//! Application service: Fluent Bit configuration dry-run validation.

use std::path::{Path, PathBuf};

use crate::application::ports::{CommandRunner, ExecContext, PluginCatalog};
use crate::domain::error::{ExecError, ValidationError};
use crate::domain::extract::extract_error;
use crate::domain::invocation::dry_run_args;
use crate::domain::settings::ValidatorSettings;

/// Marker whose presence in failed dry-run output means Fluent Bit printed a
/// diagnostic worth extracting.
const ERROR_MARKER: &str = "Error";

/// Validates a configuration file before it is rolled out.
#[allow(async_fn_in_trait)]
pub trait ConfigValidator {
    /// Validate the configuration at `config_file`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing why the configuration was
    /// rejected or could not be checked.
    async fn validate(&self, ctx: &ExecContext, config_file: &Path) -> Result<(), ValidationError>;
}

/// Production validator: one `fluent-bit --dry-run` per call.
pub struct FluentBitValidator<R, P> {
    fluent_bit_path: PathBuf,
    plugin_directory: PathBuf,
    runner: R,
    catalog: P,
}

impl<R, P> FluentBitValidator<R, P> {
    /// The process runner used for dry-runs. Lets callers holding a
    /// recording runner inspect the invocations it saw.
    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    #[must_use]
    pub fn plugin_directory(&self) -> &Path {
        &self.plugin_directory
    }
}

impl<R: CommandRunner, P: PluginCatalog> FluentBitValidator<R, P> {
    #[must_use]
    pub fn new(
        fluent_bit_path: impl Into<PathBuf>,
        plugin_directory: impl Into<PathBuf>,
        runner: R,
        catalog: P,
    ) -> Self {
        Self {
            fluent_bit_path: fluent_bit_path.into(),
            plugin_directory: plugin_directory.into(),
            runner,
            catalog,
        }
    }

    /// Build a validator from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ValidatorSettings, runner: R, catalog: P) -> Self {
        Self::new(
            settings.fluent_bit_path.clone(),
            settings.plugin_directory.clone(),
            runner,
            catalog,
        )
    }

    /// Plugins that would be passed with `-e`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PluginDirectory` if the directory cannot be read.
    pub fn plugins(&self) -> Result<Vec<PathBuf>, ValidationError> {
        self.catalog
            .list_plugins(&self.plugin_directory)
            .map_err(|source| ValidationError::PluginDirectory {
                path: self.plugin_directory.clone(),
                source,
            })
    }
}

impl<R: CommandRunner, P: PluginCatalog> ConfigValidator for FluentBitValidator<R, P> {
    async fn validate(&self, ctx: &ExecContext, config_file: &Path) -> Result<(), ValidationError> {
        let plugins = self.plugins()?;
        let args = dry_run_args(config_file, &plugins);
        tracing::debug!(
            program = %self.fluent_bit_path.display(),
            config = %config_file.display(),
            plugins = plugins.len(),
            ?args,
            "running fluent-bit dry-run"
        );

        let output = self
            .runner
            .run(&self.fluent_bit_path, &args, ctx)
            .await
            .map_err(ValidationError::Execution)?;
        tracing::debug!(status = %output.status, "fluent-bit dry-run finished");

        if output.status.success() {
            return Ok(());
        }

        let text = combined_output(&output);
        if text.contains(ERROR_MARKER) {
            return Err(ValidationError::Rejected {
                reason: extract_error(&text),
            });
        }
        Err(ValidationError::Execution(ExecError::Exit(output.status)))
    }
}

/// Captured text decoded lossily: `stdout` (which holds both streams when
/// the runner combines them), then anything left in `stderr`.
fn combined_output(output: &std::process::Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
