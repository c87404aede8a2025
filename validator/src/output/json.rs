//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed document to
//! stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::FileReport;

/// Format a JSON error object for commands that fail before producing a
/// result.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable renderer.
pub struct JsonRenderer;

impl JsonRenderer {
    /// `{"valid": <all valid>, "files": [...]}`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_reports(&self, reports: &[FileReport]) -> Result<()> {
        let obj = serde_json::json!({
            "valid": reports.iter().all(|r| r.valid),
            "files": reports,
        });
        print_pretty(&obj)
    }

    /// `{"directory": "...", "plugins": [...]}`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_plugins(&self, dir: &Path, plugins: &[PathBuf]) -> Result<()> {
        let obj = serde_json::json!({
            "directory": dir,
            "plugins": plugins,
        });
        print_pretty(&obj)
    }

    /// `{"reason": "...", "pattern": "..."|null}`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_extraction(&self, reason: &str, pattern: Option<&str>) -> Result<()> {
        let obj = serde_json::json!({
            "reason": reason,
            "pattern": pattern,
        });
        print_pretty(&obj)
    }
}

fn print_pretty(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{text}");
    Ok(())
}
