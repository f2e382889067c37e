//! CLI command implementations.
//!
//! `start` loads and validates the config, seeds the store, and serves
//! until the process exits. `check` stops after validation, for config
//! review in CI.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::{ServiceConfig, TableRegistry};
use crate::engine::DocumentStore;
use crate::grid::GridService;
use crate::http_server::HttpServer;
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the selected command
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
    }
}

/// Boot sequence: config, store, seed, registry, server.
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    let store = DocumentStore::new();
    seed_store(&store, &config)?;

    let tables = TableRegistry::new(config.tables.clone());
    Logger::info(
        "boot",
        &[
            ("config", &config_path.display().to_string()),
            ("tables", &tables.len().to_string()),
        ],
    );

    let service = GridService::new(store, tables);
    let server = HttpServer::new(config.http, service);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// Validates the config file and exits
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    println!(
        "config ok: {} tables, {} seed files",
        config.tables.len(),
        config.seed.len()
    );
    Ok(())
}

/// Loads each seed file (a JSON array of documents) into its collection.
fn seed_store(store: &DocumentStore, config: &ServiceConfig) -> CliResult<()> {
    for seed in &config.seed {
        let raw = fs::read_to_string(&seed.path).map_err(|source| CliError::SeedRead {
            path: seed.path.clone(),
            source,
        })?;
        let parsed: Value = serde_json::from_str(&raw).map_err(|source| CliError::SeedParse {
            path: seed.path.clone(),
            source,
        })?;
        let Value::Array(documents) = parsed else {
            return Err(CliError::SeedNotAnArray {
                path: seed.path.clone(),
            });
        };

        let loaded = store.insert_many(&seed.collection, documents)?;
        Logger::info(
            "seed_loaded",
            &[
                ("collection", seed.collection.as_str()),
                ("documents", &loaded.to_string()),
            ],
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedSpec;
    use crate::http_server::HttpServerConfig;
    use serde_json::json;

    #[test]
    fn seed_loads_array_of_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(
            &path,
            json!([{"name": "boot"}, {"name": "halt"}]).to_string(),
        )
        .unwrap();

        let store = DocumentStore::new();
        let config = ServiceConfig {
            http: HttpServerConfig::default(),
            tables: vec![],
            seed: vec![SeedSpec {
                collection: "events".to_string(),
                path,
            }],
        };

        seed_store(&store, &config).unwrap();
        assert_eq!(store.count("events").unwrap(), 2);
    }

    #[test]
    fn seed_rejects_non_array_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, json!({"name": "boot"}).to_string()).unwrap();

        let store = DocumentStore::new();
        let config = ServiceConfig {
            http: HttpServerConfig::default(),
            tables: vec![],
            seed: vec![SeedSpec {
                collection: "events".to_string(),
                path,
            }],
        };

        let err = seed_store(&store, &config).unwrap_err();
        assert!(matches!(err, CliError::SeedNotAnArray { .. }));
    }
}
