use lowerext_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    if let Err(err) = logging::init_logging() {
        eprintln!("lowerext warning: {:#}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("lowerext error: {:#}", err);
        std::process::exit(1);
    }
}
