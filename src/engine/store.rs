//! Embedded document store.
//!
//! Collections of JSON documents behind a read/write lock, shared by every
//! request handler. Queries take the read side, inline edits the write
//! side; concurrent edits to one document are serialized only by that lock
//! (last-writer-wins, no version check).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use uuid::Uuid;

use super::errors::{EngineError, EngineResult};

/// Primary-key field carried by every stored document
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Default, Clone)]
struct CollectionData {
    /// Documents in insertion order
    documents: Vec<Value>,
}

/// Outcome of a targeted update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Documents whose identifier matched
    pub matched: u64,
    /// Documents whose stored value actually changed
    pub modified: u64,
}

/// Shared in-memory collection store
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    collections: Arc<RwLock<HashMap<String, CollectionData>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one document, assigning a `_id` when absent.
    /// Returns the document's identifier.
    pub fn insert(&self, collection: &str, mut document: Value) -> EngineResult<String> {
        let object = document.as_object_mut().ok_or(EngineError::NotAnObject)?;
        let id = match object.get(ID_FIELD) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                let id = Uuid::new_v4().to_string();
                object.insert(ID_FIELD.to_string(), Value::String(id.clone()));
                id
            }
        };

        let mut collections = self
            .collections
            .write()
            .map_err(|_| EngineError::LockPoisoned("insert"))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .documents
            .push(document);
        Ok(id)
    }

    /// Inserts every document of a JSON array
    pub fn insert_many(&self, collection: &str, documents: Vec<Value>) -> EngineResult<usize> {
        let mut inserted = 0;
        for document in documents {
            self.insert(collection, document)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Unconditional document count of a collection (0 when absent)
    pub fn count(&self, collection: &str) -> EngineResult<u64> {
        let collections = self
            .collections
            .read()
            .map_err(|_| EngineError::LockPoisoned("count"))?;
        Ok(collections
            .get(collection)
            .map(|c| c.documents.len() as u64)
            .unwrap_or(0))
    }

    /// Snapshot of a collection's documents in insertion order
    pub fn documents(&self, collection: &str) -> EngineResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| EngineError::LockPoisoned("documents"))?;
        Ok(collections
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default())
    }

    /// Reads one document whose `key` field matches `id`
    pub fn find_by_id(&self, collection: &str, key: &str, id: &str) -> EngineResult<Option<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| EngineError::LockPoisoned("find_by_id"))?;
        Ok(collections
            .get(collection)
            .and_then(|c| c.documents.iter().find(|d| id_matches(d, key, id)).cloned()))
    }

    /// Single-field set on the one document whose `key` field matches `id`.
    ///
    /// `modified` stays 0 when the stored value already equals the new one,
    /// which the edit path reports as `success: false`.
    pub fn update_field(
        &self,
        collection: &str,
        key: &str,
        id: &str,
        field: &str,
        new_value: Value,
    ) -> EngineResult<UpdateOutcome> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| EngineError::LockPoisoned("update_field"))?;
        let Some(data) = collections.get_mut(collection) else {
            return Ok(UpdateOutcome {
                matched: 0,
                modified: 0,
            });
        };

        for document in data.documents.iter_mut() {
            if !id_matches(document, key, id) {
                continue;
            }
            let object = document.as_object_mut().ok_or(EngineError::NotAnObject)?;
            let modified = if object.get(field) == Some(&new_value) {
                0
            } else {
                object.insert(field.to_string(), new_value);
                1
            };
            return Ok(UpdateOutcome {
                matched: 1,
                modified,
            });
        }

        Ok(UpdateOutcome {
            matched: 0,
            modified: 0,
        })
    }
}

/// Compares a document's key field against a string identifier
fn id_matches(document: &Value, key: &str, id: &str) -> bool {
    match document.get(key) {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}
