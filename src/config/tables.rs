//! Table profiles.
//!
//! A profile binds one grid view to a collection: its column descriptor
//! table, primary key, and the optional group/project stages a distinct
//! view carries. Profiles are defined once in the service config and are
//! immutable afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnTable;
use crate::pipeline::{GroupSpec, ProjectSpec};

/// Configuration of one grid view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// Name the grid sends in the `tables` parameter
    pub name: String,

    /// Backing collection
    pub collection: String,

    /// Primary-key field (default `_id`)
    #[serde(default = "default_primary_key")]
    pub primary_key: String,

    /// Ordered column descriptor table
    pub columns: ColumnTable,

    /// Group stage for distinct views. Its presence also disables the
    /// match stage for this view.
    #[serde(default)]
    pub group: Option<GroupSpec>,

    /// Projection applied after paging
    #[serde(default)]
    pub project: Option<ProjectSpec>,
}

fn default_primary_key() -> String {
    "_id".to_string()
}

/// Lookup of table profiles by name
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: HashMap<String, TableProfile>,
}

impl TableRegistry {
    pub fn new(profiles: Vec<TableProfile>) -> Self {
        let tables = profiles
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        Self { tables }
    }

    pub fn get(&self, name: &str) -> Option<&TableProfile> {
        self.tables.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnDescriptor;

    #[test]
    fn registry_lookup() {
        let registry = TableRegistry::new(vec![TableProfile {
            name: "events".to_string(),
            collection: "events".to_string(),
            primary_key: "_id".to_string(),
            columns: ColumnTable::new(vec![ColumnDescriptor::new("a", "a")]),
            group: None,
            project: None,
        }]);

        assert_eq!(registry.len(), 1);
        assert!(registry.get("events").is_some());
        assert!(registry.get("ghost").is_none());
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: TableProfile = serde_json::from_value(serde_json::json!({
            "name": "events",
            "collection": "events",
            "columns": [{"db": "a", "dt": "a"}]
        }))
        .unwrap();
        assert_eq!(profile.primary_key, "_id");
        assert!(profile.group.is_none());
        assert!(profile.project.is_none());
    }
}
