//! Service configuration
//!
//! The service is configured from a single JSON file holding the HTTP
//! bind settings, the table profiles, and optional seed data. The file
//! is read once at startup and validated before anything binds a port.

mod errors;
mod tables;

pub use errors::{ConfigError, ConfigResult};
pub use tables::{TableProfile, TableRegistry};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;

/// Seed data for one collection, loaded at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSpec {
    /// Collection the documents go into
    pub collection: String,

    /// Path to a JSON file holding an array of documents
    pub path: PathBuf,
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP bind settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Grid views served by this instance
    pub tables: Vec<TableProfile>,

    /// Collections seeded from disk at startup
    #[serde(default)]
    pub seed: Vec<SeedSpec>,
}

impl ServiceConfig {
    /// Loads and validates a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ServiceConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural invariants the type system cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tables.is_empty() {
            return Err(ConfigError::NoTables);
        }

        let mut seen = HashSet::new();
        for profile in &self.tables {
            if !seen.insert(profile.name.as_str()) {
                return Err(ConfigError::DuplicateTable {
                    name: profile.name.clone(),
                });
            }
            if profile.columns.is_empty() {
                return Err(ConfigError::EmptyColumns {
                    table: profile.name.clone(),
                });
            }
        }

        let collections: HashSet<&str> =
            self.tables.iter().map(|p| p.collection.as_str()).collect();
        for seed in &self.seed {
            if !collections.contains(seed.collection.as_str()) {
                return Err(ConfigError::UnknownSeedCollection {
                    collection: seed.collection.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnDescriptor, ColumnTable};

    fn minimal_profile(name: &str) -> TableProfile {
        TableProfile {
            name: name.to_string(),
            collection: name.to_string(),
            primary_key: "_id".to_string(),
            columns: ColumnTable::new(vec![ColumnDescriptor::new("a", "a")]),
            group: None,
            project: None,
        }
    }

    #[test]
    fn empty_tables_rejected() {
        let config = ServiceConfig {
            http: HttpServerConfig::default(),
            tables: vec![],
            seed: vec![],
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoTables)));
    }

    #[test]
    fn duplicate_table_rejected() {
        let config = ServiceConfig {
            http: HttpServerConfig::default(),
            tables: vec![minimal_profile("events"), minimal_profile("events")],
            seed: vec![],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTable { .. })
        ));
    }

    #[test]
    fn seed_must_target_known_collection() {
        let config = ServiceConfig {
            http: HttpServerConfig::default(),
            tables: vec![minimal_profile("events")],
            seed: vec![SeedSpec {
                collection: "ghost".to_string(),
                path: PathBuf::from("ghost.json"),
            }],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownSeedCollection { .. })
        ));
    }

    #[test]
    fn load_round_trips_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            serde_json::json!({
                "http": {"port": 9000},
                "tables": [{
                    "name": "events",
                    "collection": "events",
                    "columns": [{"db": "a", "dt": "a"}]
                }]
            })
            .to_string(),
        )
        .unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.tables.len(), 1);
    }
}
