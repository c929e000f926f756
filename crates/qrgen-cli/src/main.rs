use qrgen_core::logging;
use qrgen_core::GenerateError;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        if let Some(gen_err) = err.downcast_ref::<GenerateError>() {
            if gen_err.is_user_input() {
                eprintln!("qrgen warning: {gen_err}");
                std::process::exit(2);
            }
        }
        eprintln!("qrgen error: {:#}", err);
        std::process::exit(1);
    }
}
