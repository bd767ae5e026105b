use jswatch_core::logging;

mod cli;

use crate::cli::{CliCommand, Outcome};

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(Outcome::Done) => {}
        Ok(Outcome::ChangesFound) => std::process::exit(2),
        Err(err) => {
            eprintln!("jswatch error: {:#}", err);
            std::process::exit(1);
        }
    }
}
