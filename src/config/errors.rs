use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config defines no tables")]
    NoTables,

    #[error("table {table} defines no columns")]
    EmptyColumns { table: String },

    #[error("duplicate table name {name}")]
    DuplicateTable { name: String },

    #[error("seed entry references unknown collection {collection}")]
    UnknownSeedCollection { collection: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
