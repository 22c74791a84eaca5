//! End-to-end conversion tests

use super::{run_cli, run_cli_bytes};
use serial_test::serial;

#[test]
#[serial]
fn test_text_argument_gets_newline() {
    let out = run_cli(&["--locale", "invariant", "hello world"], "").unwrap();
    assert_eq!(out, "Hello World\n");
}

#[test]
#[serial]
fn test_stdin_is_one_text_value() {
    let out = run_cli(&["-L", "en-US"], "  multiple   spaces \nSECOND line\n").unwrap();
    assert_eq!(out, "  Multiple   Spaces \nSecond Line\n");
}

#[test]
#[serial]
fn test_empty_stdin_gives_empty_output() {
    let out = run_cli(&["-L", "invariant"], "").unwrap();
    assert_eq!(out, "");
}

#[test]
#[serial]
fn test_apostrophe_behaviour_locked() {
    let out = run_cli(&["-L", "invariant", "o'brien"], "").unwrap();
    assert_eq!(out, "O'brien\n");
}

#[test]
#[serial]
fn test_turkish_locale_from_flag() {
    let out = run_cli(&["--locale", "tr_TR.UTF-8", "istanbul IRMAK"], "").unwrap();
    assert_eq!(out, "İstanbul Irmak\n");
}

#[test]
#[serial]
fn test_invalid_locale_is_user_error() {
    use titlecase::core::error_handling::{AppError, ContextualError};

    let err = run_cli(&["--locale", "not a locale!", "text"], "").unwrap_err();
    assert!(matches!(err, AppError::Locale(_)));
    assert!(err.is_user_actionable());
}

#[test]
#[serial]
fn test_non_utf8_stdin_is_user_error() {
    use titlecase::core::error_handling::{AppError, ContextualError};

    let err = run_cli_bytes(&["-L", "invariant"], &[b'a', 0xFF, b'b']).unwrap_err();
    assert!(matches!(err, AppError::Stdin(_)));
    assert!(err.is_user_actionable());
}
