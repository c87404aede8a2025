//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution,
//! plugin directory listing, and settings file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod fs;
pub mod settings;

pub use command_runner::TokioCommandRunner;
pub use fs::LocalFs;
pub use settings::YamlSettingsStore;
