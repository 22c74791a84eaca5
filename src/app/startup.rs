//! Binary entry point logic

use super::cli::args::Args;
use super::cli::config::load_config_file;
use crate::core::error_handling::{log_error_with_context, AppError, AppResult};
use crate::core::locale::resolve_locale;
use crate::core::logging::{init_logging, is_logging_initialized};
use crate::core::strings::title_case;
use clap::Parser;
use std::io::{Read, Write};
use std::process::ExitCode;

/// Parse the command line, convert, and report failures
pub fn startup() -> ExitCode {
    let args = Args::parse();
    let use_color = args.use_color();

    let result = run(args, &mut std::io::stdin().lock(), &mut std::io::stdout().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Config errors can surface before the logger is up
            let logging = if is_logging_initialized() {
                Ok(())
            } else {
                init_logging(None, None, None, use_color)
            };
            report_failure(&e, logging, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Log a fatal error, or write it to `stderr` when there is no logger to use
fn report_failure<W: Write>(error: &AppError, logging: AppResult<()>, stderr: &mut W) {
    match logging {
        Ok(()) => log_error_with_context(error, "Title-casing failed"),
        Err(log_error) => {
            let _ = writeln!(stderr, "FATAL: {}", error);
            let _ = writeln!(stderr, "FATAL: {}", log_error);
        }
    }
}

/// Run one conversion with the given streams
///
/// The text comes from `args.text` or, when that is absent, the whole of
/// `input`. Text given on the command line is printed with a trailing
/// newline; text read from `input` is written back exactly as converted.
pub fn run<R: Read, W: Write>(mut args: Args, input: &mut R, output: &mut W) -> AppResult<()> {
    if let Some(config) = load_config_file(args.config_file.as_deref())? {
        args.apply_toml_values(&config)?;
    }

    let use_color = args.use_color();
    colored::control::set_override(use_color);
    init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file_path().as_deref(),
        use_color,
    )?;

    let locale = resolve_locale(args.locale.as_deref(), args.config_locale.as_deref())?;
    log::info!("Title-casing with locale {}", locale);

    let written = match args.text.as_deref() {
        Some(text) => writeln!(output, "{}", title_case(text, &locale)),
        None => {
            let mut text = String::new();
            input.read_to_string(&mut text).map_err(AppError::Stdin)?;
            write!(output, "{}", title_case(&text, &locale))
        }
    };
    written.map_err(AppError::Output)?;

    output.flush().map_err(AppError::Output)
}
