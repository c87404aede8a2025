//! Fluent Bit configuration validator: library behind `fluentbit-validate`.
//!
//! The entry point for embedding is
//! [`application::services::config_validator::FluentBitValidator`], which
//! dry-runs a configuration file and turns Fluent Bit's diagnostics into a
//! [`domain::ValidationError`].

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
