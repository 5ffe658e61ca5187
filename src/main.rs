//! Binary entry point for `relindex`.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use relindex::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    relindex::observability::init(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli::run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminating");
            ExitCode::FAILURE
        }
    }
}
