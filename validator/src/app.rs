//! Application context: unified state passed to every command handler.

use crate::application::services::config_validator::FluentBitValidator;
use crate::domain::settings::ValidatorSettings;
use crate::infra::{LocalFs, TokioCommandRunner, YamlSettingsStore};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
    /// Explicit settings file, overriding the environment/default location.
    pub settings: Option<std::path::PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where validator settings are loaded from.
    pub settings_store: YamlSettingsStore,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        let settings_store = match &flags.settings {
            Some(path) => YamlSettingsStore::at(path),
            None => YamlSettingsStore::default(),
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            settings_store,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Spinners only make sense for humans on a terminal.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        !self.is_json() && self.output.show_progress()
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Production validator for the resolved settings.
    #[must_use]
    pub fn validator(
        &self,
        settings: &ValidatorSettings,
    ) -> FluentBitValidator<TokioCommandRunner, LocalFs> {
        FluentBitValidator::from_settings(
            settings,
            TokioCommandRunner::new(settings.timeout()),
            LocalFs,
        )
    }
}
