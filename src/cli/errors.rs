//! CLI error types. Every CLI error is fatal and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("seed file {path} must hold a JSON array of documents")]
    SeedNotAnArray { path: PathBuf },

    #[error("seed load failed: {0}")]
    SeedStore(#[from] EngineError),

    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
