//! Binary entry point. All logic lives in the CLI module; this only
//! dispatches and reports failure on stderr.

use gridserve::cli;
use gridserve::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal("startup_failed", &[("message", &e.to_string())]);
        std::process::exit(1);
    }
}
