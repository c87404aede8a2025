//! Domain layer: pure logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process::Command`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod extract;
pub mod invocation;
pub mod report;
pub mod settings;

pub use error::{ExecError, FailureKind, SettingsError, ValidationError};
pub use extract::{extract_error, strip_ansi};
pub use invocation::dry_run_args;
pub use report::FileReport;
pub use settings::{SettingsOverrides, ValidatorSettings, validate_settings};
