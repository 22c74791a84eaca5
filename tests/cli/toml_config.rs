//! CLI TOML configuration tests

use serial_test::serial;
use std::io::Write;
use titlecase::app::cli::args::Args;
use titlecase::app::startup::run;
use titlecase::core::error_handling::AppError;

fn run_with_config(config: &str, argv: &[&str]) -> Result<String, AppError> {
    use clap::Parser;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", config).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut full = vec!["titlecase", "--config-file", path.as_str()];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).unwrap();

    let mut output = Vec::new();
    run(args, &mut "".as_bytes(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
#[serial]
fn test_locale_from_config_file() {
    let out = run_with_config("locale = \"nl\"\n", &["het ijsselmeer"]).unwrap();
    assert_eq!(out, "Het IJsselmeer\n");
}

#[test]
#[serial]
fn test_cli_locale_overrides_config() {
    let out = run_with_config("locale = \"nl\"\n", &["--locale", "en", "het ijsselmeer"]).unwrap();
    assert_eq!(out, "Het Ijsselmeer\n");
}

#[test]
#[serial]
fn test_bad_config_value_is_reported() {
    let err = run_with_config("log-format = \"xml\"\n", &["text"]).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
#[serial]
fn test_missing_config_file_is_reported() {
    use clap::Parser;

    let args = Args::try_parse_from(["titlecase", "--config-file", "/no/such/file.toml", "x"]).unwrap();
    let mut output = Vec::new();
    let err = run(args, &mut "".as_bytes(), &mut output).unwrap_err();
    assert!(err.to_string().contains("/no/such/file.toml"));
    assert!(output.is_empty());
}

#[test]
#[serial]
fn test_config_color_applies_to_colored_override() {
    run_with_config("color = true\n", &["x"]).unwrap();
    assert!(colored::control::SHOULD_COLORIZE.should_colorize());

    run_with_config("color = true\n", &["--no-color", "x"]).unwrap();
    assert!(!colored::control::SHOULD_COLORIZE.should_colorize());
}
