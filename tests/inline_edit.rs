//! Inline-edit integration tests.
//!
//! The edit call updates one field of one document and reports success
//! only when the stored value actually changed.

use gridserve::columns::{ColumnDescriptor, ColumnTable};
use gridserve::config::{TableProfile, TableRegistry};
use gridserve::engine::DocumentStore;
use gridserve::grid::{EditCommand, GridError, GridService};
use serde_json::json;

fn setup_service() -> GridService {
    let store = DocumentStore::new();
    store
        .insert_many(
            "users",
            vec![
                json!({"_id": "u1", "name": "alice", "role": "admin"}),
                json!({"_id": "u2", "name": "bob",   "role": "viewer"}),
            ],
        )
        .unwrap();

    let columns = ColumnTable::new(vec![
        ColumnDescriptor::new("_id", "DT_RowId"),
        ColumnDescriptor::new("name", "name").editable(),
        ColumnDescriptor::new("role", "role"),
    ]);
    let tables = TableRegistry::new(vec![TableProfile {
        name: "users".to_string(),
        collection: "users".to_string(),
        primary_key: "_id".to_string(),
        columns,
        group: None,
        project: None,
    }]);

    GridService::new(store, tables)
}

fn command(id: &str, column: &str, value: &str) -> EditCommand {
    EditCommand {
        table: "users".to_string(),
        id: id.to_string(),
        column: column.to_string(),
        new_value: value.to_string(),
    }
}

#[test]
fn test_edit_updates_stored_document() {
    let service = setup_service();
    let response = service.edit(&command("u2", "name", "robert")).unwrap();

    assert!(response.success);
    assert_eq!(response.value, "robert");

    let doc = service.store().find_by_id("users", "_id", "u2").unwrap().unwrap();
    assert_eq!(doc["name"], "robert");
}

/// Writing the value the cell already holds modifies nothing, so the
/// response reports failure even though the document was matched.
#[test]
fn test_edit_same_value_reports_failure() {
    let service = setup_service();
    let response = service.edit(&command("u1", "name", "alice")).unwrap();

    assert!(!response.success);
    assert_eq!(response.value, "alice");
}

#[test]
fn test_edit_unknown_id_reports_failure() {
    let service = setup_service();
    let response = service.edit(&command("nope", "name", "x")).unwrap();
    assert!(!response.success);
}

#[test]
fn test_edit_non_editable_column_rejected() {
    let service = setup_service();
    let err = service.edit(&command("u1", "role", "root")).unwrap_err();
    assert!(matches!(err, GridError::ColumnNotEditable(_)));

    // the document must be untouched
    let doc = service.store().find_by_id("users", "_id", "u1").unwrap().unwrap();
    assert_eq!(doc["role"], "admin");
}

#[test]
fn test_edit_unknown_column_rejected() {
    let service = setup_service();
    assert!(service.edit(&command("u1", "ghost", "x")).is_err());
}

/// A profile may key its collection on something other than `_id`; the
/// edit call must locate documents through that field.
#[test]
fn test_edit_matches_on_profile_primary_key() {
    let store = DocumentStore::new();
    store
        .insert_many(
            "products",
            vec![
                json!({"sku": "P-100", "name": "widget"}),
                json!({"sku": "P-200", "name": "gadget"}),
            ],
        )
        .unwrap();

    let columns = ColumnTable::new(vec![
        ColumnDescriptor::new("sku", "DT_RowId"),
        ColumnDescriptor::new("name", "name").editable(),
    ]);
    let tables = TableRegistry::new(vec![TableProfile {
        name: "products".to_string(),
        collection: "products".to_string(),
        primary_key: "sku".to_string(),
        columns,
        group: None,
        project: None,
    }]);
    let service = GridService::new(store, tables);

    let mut cmd = command("P-100", "name", "sprocket");
    cmd.table = "products".to_string();
    let response = service.edit(&cmd).unwrap();

    assert!(response.success);
    assert_eq!(response.value, "sprocket");

    let doc = service
        .store()
        .find_by_id("products", "sku", "P-100")
        .unwrap()
        .unwrap();
    assert_eq!(doc["name"], "sprocket");
}

#[test]
fn test_edit_unknown_table_rejected() {
    let service = setup_service();
    let mut cmd = command("u1", "name", "x");
    cmd.table = "ghost".to_string();
    assert!(matches!(
        service.edit(&cmd).unwrap_err(),
        GridError::UnknownTable(_)
    ));
}
