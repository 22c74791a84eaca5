//! CLI integration test modules

pub mod conversion;
pub mod toml_config;

use titlecase::app::cli::args::Args;
use titlecase::app::startup::run;
use titlecase::core::error_handling::AppResult;

/// Run the CLI in-process with `argv` and `stdin`, returning stdout
///
/// An empty config file keeps a user's own default config out of the run.
pub fn run_cli(argv: &[&str], stdin: &str) -> AppResult<String> {
    run_cli_bytes(argv, stdin.as_bytes())
}

/// [`run_cli`] with raw stdin bytes
pub fn run_cli_bytes(argv: &[&str], stdin: &[u8]) -> AppResult<String> {
    use clap::Parser;

    let empty_config = tempfile::NamedTempFile::new().expect("temp config file");
    let config_path = empty_config.path().to_str().expect("temp path should be UTF-8");

    let mut full = vec!["titlecase", "--config-file", config_path];
    full.extend_from_slice(argv);
    let args = Args::try_parse_from(full).expect("test arguments should parse");

    let mut input = stdin;
    let mut output = Vec::new();
    run(args, &mut input, &mut output)?;
    Ok(String::from_utf8(output).expect("stdout should be UTF-8"))
}
