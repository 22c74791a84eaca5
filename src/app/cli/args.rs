//! Command-line arguments for the `titlecase` binary

use crate::core::version;
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
pub const LOG_FORMATS: [&str; 3] = ["text", "ext", "json"];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "titlecase")]
#[command(about = "Convert text to title case using locale-aware casing rules")]
#[command(version, long_version = version::long_version())]
pub struct Args {
    /// Text to convert (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Locale whose casing rules apply (BCP 47 tag, POSIX name or 'invariant')
    #[arg(short = 'L', long = "locale", value_name = "TAG")]
    pub locale: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force coloured log output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured log output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Locale from the configuration file
    #[arg(skip)]
    pub config_locale: Option<String>,

    /// Colour preference from the configuration file
    #[arg(skip)]
    pub config_color: Option<bool>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour flags win over the config file, which wins over TTY detection
    pub fn use_color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            self.config_color
                .unwrap_or_else(|| std::io::stderr().is_terminal())
        }
    }

    /// Log file to write to, if any; `none` disables file logging
    pub fn log_file_path(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .filter(|path| !path.as_os_str().eq_ignore_ascii_case("none"))
            .map(|path| path.to_string_lossy().to_string())
    }
}
