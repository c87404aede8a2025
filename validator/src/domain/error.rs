//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Prefix of the message returned when the agent rejected the configuration.
pub const REJECTED_PREFIX: &str =
    "Validation of the supplied configuration failed with the following reason: ";

/// Prefix of the message returned when the dry-run failed without diagnostics.
pub const EXECUTION_PREFIX: &str = "Error while validating Fluent Bit config: ";

// ── Execution errors ──────────────────────────────────────────────────────────

/// Why a dry-run process did not complete successfully.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {secs}s", secs = .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    #[error("{program} was cancelled")]
    Cancelled { program: String },

    #[error("{0}")]
    Exit(ExitStatus),
}

// ── Validation errors ─────────────────────────────────────────────────────────

/// Outcome of a failed configuration validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The plugin directory could not be listed. The message is the I/O error.
    #[error("{source}")]
    PluginDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The agent rejected the configuration and printed a diagnostic.
    #[error("{prefix}{reason}", prefix = REJECTED_PREFIX)]
    Rejected { reason: String },

    /// The dry-run failed without printing anything recognisable.
    #[error("{prefix}{0}", prefix = EXECUTION_PREFIX)]
    Execution(#[source] ExecError),
}

impl ValidationError {
    /// The extracted diagnostic, if the agent rejected the configuration and
    /// the extractor recovered a non-empty description.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Rejected { reason } if !reason.is_empty() => Some(reason),
            _ => None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::PluginDirectory { .. } => FailureKind::PluginDirectory,
            Self::Rejected { .. } => FailureKind::ConfigRejected,
            Self::Execution(_) => FailureKind::ExecutionFailed,
        }
    }
}

/// Which `ValidationError` variant a failure came from. Serialized as the
/// machine-readable code used by JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    PluginDirectory,
    ConfigRejected,
    ExecutionFailed,
}

// ── Settings errors ───────────────────────────────────────────────────────────

/// Errors related to validator settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("fluent_bit_path must not be empty")]
    EmptyBinaryPath,

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}
