//! Dry-run command line construction.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Flags that put Fluent Bit into parse-only mode with minimal banner output.
pub const DRY_RUN_FLAGS: &[&str] = &["--dry-run", "--quiet"];

/// Build the argument vector for a dry-run of `config_file`.
///
/// Produces `--dry-run --quiet --config <config_file>` followed by one
/// `-e <plugin>` pair per plugin, in the order given.
#[must_use]
pub fn dry_run_args(config_file: &Path, plugins: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(DRY_RUN_FLAGS.len() + 2 + plugins.len() * 2);
    args.extend(DRY_RUN_FLAGS.iter().map(OsString::from));
    args.push("--config".into());
    args.push(config_file.as_os_str().to_owned());
    for plugin in plugins {
        args.push("-e".into());
        args.push(plugin.as_os_str().to_owned());
    }
    args
}
