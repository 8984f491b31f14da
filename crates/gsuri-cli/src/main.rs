mod cli;

use crate::cli::CliCommand;

fn main() {
    // Parse CLI, load config, initialize logging and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("gsuri error: {:#}", err);
        std::process::exit(1);
    }
}
