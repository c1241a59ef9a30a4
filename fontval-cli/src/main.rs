//! Binary entrypoint for fontval

use std::process::ExitCode;

fn main() -> ExitCode {
    match fontval_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
