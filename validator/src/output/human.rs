//! Human-readable terminal renderer.

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize as _;

use crate::domain::{FailureKind, FileReport};
use crate::output::OutputContext;

/// Shown in place of an extracted reason when extraction recovered nothing.
const UNKNOWN_REASON: &str = "unknown validation failure";

/// Renders results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render one line per file; failures go to stderr.
    pub fn render_reports(&self, reports: &[FileReport]) {
        for report in reports {
            let file = report.file.display().to_string();
            let file = file.style(self.ctx.styles.path);
            if report.valid {
                self.ctx.success(&format!("{file} is valid"));
                continue;
            }
            match (report.code, &report.reason) {
                (Some(FailureKind::ConfigRejected), Some(reason)) => {
                    self.ctx.error(&format!("{file}: {reason}"));
                }
                (Some(FailureKind::ConfigRejected), None) => {
                    self.ctx.error(&format!("{file}: {UNKNOWN_REASON}"));
                }
                _ => {
                    let message = report.message.as_deref().unwrap_or(UNKNOWN_REASON);
                    self.ctx.error(&format!("{file}: {message}"));
                }
            }
        }
    }

    /// Render the discovered plugin list.
    pub fn render_plugins(&self, dir: &Path, plugins: &[PathBuf]) {
        if plugins.is_empty() {
            self.ctx.info(&format!("No plugins in {}", dir.display()));
            return;
        }
        self.ctx.kv("Directory:", &dir.display().to_string());
        for plugin in plugins {
            self.ctx.kv("-e", &plugin.display().to_string());
        }
    }

    /// Render an extracted reason, printing only the text when `quiet`.
    pub fn render_extraction(&self, reason: &str, pattern: Option<&str>) {
        if self.ctx.quiet {
            println!("{reason}");
            return;
        }
        match pattern {
            Some(pattern) => {
                self.ctx.kv("Pattern:", pattern);
                self.ctx.kv("Reason:", reason);
            }
            None => self.ctx.warn("No error description found"),
        }
    }
}
