//! Distinct-view (group mode) integration tests.
//!
//! A profile carrying a group spec turns the view into a distinct list:
//! the match stage is skipped entirely, paging applies to the grouped
//! output, and the filtered count still reflects pre-group documents.

use std::collections::HashMap;

use gridserve::columns::{ColumnDescriptor, ColumnTable};
use gridserve::config::{TableProfile, TableRegistry};
use gridserve::engine::DocumentStore;
use gridserve::grid::GridService;
use gridserve::pipeline::GroupSpec;
use serde_json::json;

fn setup_service() -> GridService {
    let store = DocumentStore::new();
    store
        .insert_many(
            "events",
            vec![
                json!({"_id": "1", "host": "alpha", "name": "boot"}),
                json!({"_id": "2", "host": "beta",  "name": "halt"}),
                json!({"_id": "3", "host": "alpha", "name": "crash"}),
                json!({"_id": "4", "host": "gamma", "name": "boot"}),
                json!({"_id": "5", "host": "beta",  "name": "probe"}),
            ],
        )
        .unwrap();

    let columns = ColumnTable::new(vec![ColumnDescriptor::new("_id", "host")]);
    let tables = TableRegistry::new(vec![TableProfile {
        name: "hosts".to_string(),
        collection: "events".to_string(),
        primary_key: "_id".to_string(),
        columns,
        group: Some(GroupSpec {
            key: "host".to_string(),
            first_fields: vec![],
        }),
        project: None,
    }]);

    GridService::new(store, tables)
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_distinct_values_in_first_seen_order() {
    let service = setup_service();
    let response = service.data("hosts", &params(&[("length", "10")])).unwrap();

    let hosts: Vec<&str> = response
        .data
        .iter()
        .map(|row| row["host"].as_str().unwrap())
        .collect();
    assert_eq!(hosts, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_paging_applies_to_grouped_output() {
    let service = setup_service();
    let response = service
        .data("hosts", &params(&[("start", "1"), ("length", "1")]))
        .unwrap();

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0]["host"], "beta");
}

/// Search parameters are ignored in group mode: the match stage is never
/// built for distinct views.
#[test]
fn test_search_params_ignored_in_group_mode() {
    let service = setup_service();
    let response = service
        .data(
            "hosts",
            &params(&[
                ("length", "10"),
                ("search[value]", "alpha"),
                ("columns[0][data]", "host"),
                ("columns[0][searchable]", "true"),
                ("columns[0][orderable]", "true"),
            ]),
        )
        .unwrap();

    assert_eq!(response.data.len(), 3);
}

/// The filtered count counts pre-group documents, not groups. The two
/// counts agree here, both counting the raw collection.
#[test]
fn test_filtered_count_reflects_pre_group_documents() {
    let service = setup_service();
    let response = service.data("hosts", &params(&[("length", "10")])).unwrap();

    assert_eq!(response.records_total, 5);
    assert_eq!(response.records_filtered, 5);
    assert_eq!(response.data.len(), 3);
}
