//! Command-line interface.
//!
//! - start: boot the server and serve until exit
//! - check: validate a config file and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, start};
pub use errors::{CliError, CliResult};
