//! Tests for TOML configuration loading and precedence

use crate::app::cli::args::Args;
use crate::app::cli::config::{load_config_file, ConfigError};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use toml::Table;

fn table(contents: &str) -> Table {
    toml::from_str(contents).unwrap()
}

#[test]
fn test_apply_toml_values_fills_unset_fields() {
    let mut args = Args::new();
    let config = table(
        r#"
        locale = "nl-NL"
        log-level = "info"
        log-format = "ext"
        log-file = "titlecase.log"
        color = false
        "#,
    );

    args.apply_toml_values(&config).unwrap();

    assert_eq!(args.locale, None);
    assert_eq!(args.config_locale.as_deref(), Some("nl-NL"));
    assert_eq!(args.log_level.as_deref(), Some("info"));
    assert_eq!(args.log_format.as_deref(), Some("ext"));
    assert_eq!(args.log_file, Some(PathBuf::from("titlecase.log")));
    assert_eq!(args.config_color, Some(false));
}

#[test]
fn test_cli_values_win_over_toml() {
    let mut args = Args::try_parse_from([
        "titlecase",
        "--log-level",
        "trace",
        "--locale",
        "tr",
    ])
    .unwrap();

    args.apply_toml_values(&table("log-level = \"error\"\nlocale = \"nl\""))
        .unwrap();

    assert_eq!(args.log_level.as_deref(), Some("trace"));
    assert_eq!(args.locale.as_deref(), Some("tr"));
    assert_eq!(args.config_locale.as_deref(), Some("nl"));
}

#[test]
fn test_unknown_keys_ignored() {
    let mut args = Args::new();
    args.apply_toml_values(&table("repository = \"/tmp\"")).unwrap();
    assert_eq!(args.config_locale, None);
}

#[test]
fn test_wrong_types_rejected() {
    let mut args = Args::new();
    let err = args
        .apply_toml_values(&table("locale = 42"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "locale"));

    let err = args
        .apply_toml_values(&table("color = \"yes\""))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "color"));
}

#[test]
fn test_out_of_range_log_level_rejected() {
    let mut args = Args::new();
    let err = args
        .apply_toml_values(&table("log-level = \"loud\""))
        .unwrap_err();
    assert!(err.to_string().contains("one of trace, debug, info, warn, error, off"));
    assert!(err.is_user_actionable());
}

#[test]
fn test_load_explicit_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "locale = \"az\"").unwrap();

    let config = load_config_file(Some(file.path())).unwrap().unwrap();
    assert_eq!(config.get("locale").and_then(|v| v.as_str()), Some("az"));
}

#[test]
fn test_missing_explicit_config_file_is_error() {
    let err = load_config_file(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn test_malformed_config_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "locale = ").unwrap();

    let err = load_config_file(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.is_user_actionable());
}
