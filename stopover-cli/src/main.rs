//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use stopover_cli::CliError;

fn main() {
    match stopover_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("stopover: {err}");
            std::process::exit(1);
        }
    }
}
