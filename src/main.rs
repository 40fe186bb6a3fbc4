mod cli;
mod error;
mod logging;
mod run;
mod status;

use crate::cli::Cli;
use crate::status::Console;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let console = Console::detect();
    match run::run(&cli, &console) {
        Ok(_) => {
            console.message("\nHappy reading! \u{1F604}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            tracing::debug!("{err:?}");
            console.failure((*err).to_string());
            ExitCode::FAILURE
        },
    }
}
