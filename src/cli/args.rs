//! CLI argument definitions using clap
//!
//! Commands:
//! - gridserve start --config <path>
//! - gridserve check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridserve - grid query endpoint over a document store
#[derive(Parser, Debug)]
#[command(name = "gridserve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./gridserve.json")]
        config: PathBuf,
    },

    /// Validate a configuration file and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./gridserve.json")]
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
