//! Result shaping: raw documents into grid rows.

use serde_json::{Map, Value};

use crate::columns::{ColumnResult, ColumnTable};

/// Shapes every result document into a row map keyed by display field
/// name, in descriptor order. Formatter failure propagates and aborts the
/// whole batch.
pub fn shape_rows(columns: &ColumnTable, documents: &[Value]) -> ColumnResult<Vec<Value>> {
    documents
        .iter()
        .map(|document| shape_row(columns, document))
        .collect()
}

fn shape_row(columns: &ColumnTable, document: &Value) -> ColumnResult<Value> {
    let mut row = Map::new();
    for column in columns.iter() {
        let raw = document.get(&column.db).cloned().unwrap_or(Value::Null);
        let value = column.formatter.apply(&raw, document)?;
        row.insert(column.dt.clone(), value);
    }
    Ok(Value::Object(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnDescriptor, Formatter};
    use serde_json::json;

    fn table() -> ColumnTable {
        ColumnTable::new(vec![
            ColumnDescriptor::new("_id", "DT_RowId").with_formatter(Formatter::RowId),
            ColumnDescriptor::new("a", "name"),
            ColumnDescriptor::new("time", "time").with_formatter(Formatter::EpochDate),
        ])
    }

    #[test]
    fn rows_keyed_by_display_name_in_order() {
        let documents = vec![json!({"_id": "e1", "a": "alpha", "time": 1609459200})];
        let rows = shape_rows(&table(), &documents).unwrap();

        let row = rows[0].as_object().unwrap();
        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, vec!["DT_RowId", "name", "time"]);
        assert_eq!(row["DT_RowId"], json!("e1"));
        assert_eq!(row["name"], json!("alpha"));
        assert_eq!(row["time"], json!("2021-01-01 00:00:00"));
    }

    #[test]
    fn missing_field_copies_null_for_identity() {
        let documents = vec![json!({"_id": "e1", "time": 0})];
        let rows = shape_rows(&table(), &documents).unwrap();
        assert_eq!(rows[0]["name"], Value::Null);
    }

    #[test]
    fn formatter_failure_aborts_the_batch() {
        let documents = vec![
            json!({"_id": "e1", "a": "ok", "time": 0}),
            json!({"_id": "e2", "a": "bad", "time": "not-epoch"}),
        ];
        assert!(shape_rows(&table(), &documents).is_err());
    }
}
