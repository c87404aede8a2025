//! Per-file validation report consumed by the output renderers.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::{FailureKind, ValidationError};

/// Result of validating one configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Extracted diagnostic; absent when extraction recovered nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn from_outcome(file: &Path, outcome: &Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self {
                file: file.to_path_buf(),
                valid: true,
                code: None,
                message: None,
                reason: None,
            },
            Err(err) => Self {
                file: file.to_path_buf(),
                valid: false,
                code: Some(err.kind()),
                message: Some(err.to_string()),
                reason: err.reason().map(str::to_owned),
            },
        }
    }
}
