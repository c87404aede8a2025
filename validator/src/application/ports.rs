//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::domain::error::ExecError;
use crate::domain::settings::ValidatorSettings;

// ── Execution context ─────────────────────────────────────────────────────────

/// Caller-supplied bounds for one process execution.
///
/// Cancelling `cancel` or exceeding `timeout` kills the child and ends the
/// call with `ExecError::Cancelled` / `ExecError::TimedOut`.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    pub cancel: CancellationToken,
    pub timeout: Option<Duration>,
}

impl ExecContext {
    #[must_use]
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args`, capturing stdout and stderr.
    ///
    /// A non-zero exit is reported through `Output::status`, not as an error.
    /// Where the platform allows, both streams are captured in write order
    /// into `Output::stdout`; anything in `Output::stderr` is treated as
    /// having come after it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or awaited, or if
    /// `ctx` is cancelled or times out first. The child must be killed in
    /// the latter cases, not left orphaned.
    async fn run(
        &self,
        program: &Path,
        args: &[OsString],
        ctx: &ExecContext,
    ) -> Result<Output, ExecError>;
}

// ── Plugin Catalog Port ───────────────────────────────────────────────────────

/// Enumerates external plugin files.
pub trait PluginCatalog {
    /// Paths of the non-directory entries directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if `dir` cannot be read.
    fn list_plugins(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>>;
}

// ── Settings Store Port ───────────────────────────────────────────────────────

/// Loads validator settings.
pub trait SettingsStore {
    /// Load settings, returning defaults if none are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored settings cannot be read or parsed.
    fn load(&self) -> Result<ValidatorSettings>;

    /// Location the settings are loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
