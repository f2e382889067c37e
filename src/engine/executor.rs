//! Pipeline execution against the embedded store.
//!
//! Stages run in the pipeline's fixed order: match, group, sort, skip,
//! limit, project. Results are fully materialized before they are returned.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::pipeline::{GroupSpec, Pipeline, ProjectField, ProjectSpec, SortSpec};

use super::errors::EngineResult;
use super::matcher::matches_predicate;
use super::store::DocumentStore;

/// Options mirrored from the upstream driver call shape.
///
/// The embedded engine materializes results fully either way; the values
/// are carried for parity with the wire contract (`allowDiskUse: true`,
/// `batchSize: 0`) and do not change execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub allow_disk_use: bool,
    pub batch_size: u32,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            allow_disk_use: true,
            batch_size: 0,
        }
    }
}

/// Runs pipelines and count queries against one store
pub struct QueryExecutor<'a> {
    store: &'a DocumentStore,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Executes the pipeline and returns the page of raw documents
    pub fn aggregate(
        &self,
        collection: &str,
        pipeline: &Pipeline,
        _options: AggregateOptions,
    ) -> EngineResult<Vec<Value>> {
        let mut documents = self.store.documents(collection)?;

        if let Some(predicate) = &pipeline.match_stage {
            documents.retain(|d| matches_predicate(d, predicate));
        }
        if let Some(group) = &pipeline.group {
            documents = apply_group(documents, group);
        }
        if let Some(sort) = &pipeline.sort {
            apply_sort(&mut documents, sort);
        }

        let mut documents: Vec<Value> = documents
            .into_iter()
            .skip(pipeline.skip as usize)
            .take(pipeline.limit as usize)
            .collect();

        if let Some(project) = &pipeline.project {
            documents = apply_project(documents, project);
        }
        Ok(documents)
    }

    /// Unconditional document count, regardless of any filter
    pub fn count_all(&self, collection: &str) -> EngineResult<u64> {
        self.store.count(collection)
    }

    /// Count after the match predicate only. Delegates to `count_all` when
    /// the pipeline has no match or group stage.
    ///
    /// Group reshaping is not accounted for: this counts pre-group matching
    /// documents and can overstate distinct-group counts.
    pub fn count_filtered(&self, collection: &str, pipeline: &Pipeline) -> EngineResult<u64> {
        if !pipeline.has_filter_stage() {
            return self.count_all(collection);
        }
        match &pipeline.match_stage {
            Some(predicate) => {
                let documents = self.store.documents(collection)?;
                Ok(documents
                    .iter()
                    .filter(|d| matches_predicate(d, predicate))
                    .count() as u64)
            }
            None => self.count_all(collection),
        }
    }
}

/// Group stage: distinct values of the key field become groups, in
/// first-seen order; each output field takes its value from the first
/// document of the group.
fn apply_group(documents: Vec<Value>, group: &GroupSpec) -> Vec<Value> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut output: Vec<Value> = Vec::new();

    for document in documents {
        let key_value = document.get(&group.key).cloned().unwrap_or(Value::Null);
        let key_repr = key_value.to_string();
        if !seen.insert(key_repr) {
            continue;
        }

        let mut grouped = Map::new();
        grouped.insert("_id".to_string(), key_value);
        for (out_field, source_field) in &group.first_fields {
            grouped.insert(
                out_field.clone(),
                document.get(source_field).cloned().unwrap_or(Value::Null),
            );
        }
        output.push(Value::Object(grouped));
    }
    output
}

/// Stable sort on one field. Direction +1 sorts ascending, -1 descending.
fn apply_sort(documents: &mut [Value], sort: &SortSpec) {
    documents.sort_by(|a, b| {
        let ordering = compare_values(a.get(&sort.field), b.get(&sort.field));
        if sort.is_ascending() {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Compares two JSON values for sorting.
///
/// Ordering rules: missing < null < bool < number < string; same types use
/// natural ordering; arrays and objects compare equal.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let type_order = |v: &Value| -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    };

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let (a_type, b_type) = (type_order(a), type_order(b));
            if a_type != b_type {
                return a_type.cmp(&b_type);
            }
            match (a, b) {
                (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
                (Value::Number(a), Value::Number(b)) => {
                    let a = a.as_f64().unwrap_or(0.0);
                    let b = b.as_f64().unwrap_or(0.0);
                    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
                }
                (Value::String(a), Value::String(b)) => a.cmp(b),
                _ => Ordering::Equal,
            }
        }
    }
}

/// Project stage: output carries exactly the listed fields, in order
fn apply_project(documents: Vec<Value>, project: &ProjectSpec) -> Vec<Value> {
    documents
        .into_iter()
        .map(|document| {
            let mut output = Map::new();
            for (field, spec) in &project.fields {
                match spec {
                    ProjectField::Exclude => {}
                    ProjectField::Include => {
                        if let Some(value) = document.get(field) {
                            output.insert(field.clone(), value.clone());
                        }
                    }
                    ProjectField::Rename(source) => {
                        output.insert(
                            field.clone(),
                            document.get(source).cloned().unwrap_or(Value::Null),
                        );
                    }
                }
            }
            Value::Object(output)
        })
        .collect()
}
