use std::process::ExitCode;

fn main() -> ExitCode {
    titlecase::app::startup::startup()
}
