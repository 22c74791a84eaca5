//! Tests for the CLI module
//!
//! Argument parsing and TOML configuration handling.

pub mod config_tests;
