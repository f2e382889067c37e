//! Grid request orchestration.
//!
//! `GridService` owns the document store and the table registry and drives
//! both calls the endpoint serves: the data call (parse, build pipeline,
//! execute, count, shape) and the inline-edit call (resolve column, check
//! the editable allow-list, apply the single-field update).

use std::collections::HashMap;

use serde_json::Value;

use crate::config::{TableProfile, TableRegistry};
use crate::engine::{AggregateOptions, DocumentStore, QueryExecutor};
use crate::observability::Logger;
use crate::pipeline::PipelineBuilder;

use super::edit::EditCommand;
use super::envelope::{EditResponse, GridResponse};
use super::errors::{GridError, GridResult};
use super::request::GridRequest;
use super::rows::shape_rows;

/// Serves grid data and inline-edit calls over the document store
#[derive(Debug, Clone)]
pub struct GridService {
    store: DocumentStore,
    tables: TableRegistry,
}

impl GridService {
    pub fn new(store: DocumentStore, tables: TableRegistry) -> Self {
        Self { store, tables }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    fn profile(&self, table: &str) -> GridResult<&TableProfile> {
        self.tables
            .get(table)
            .ok_or_else(|| GridError::UnknownTable(table.to_string()))
    }

    /// The data call: one page of shaped rows plus both record counts.
    pub fn data(&self, table: &str, params: &HashMap<String, String>) -> GridResult<GridResponse> {
        let profile = self.profile(table)?;
        let request = GridRequest::parse(params);

        let pipeline = PipelineBuilder::new(&profile.columns).build(
            &request,
            profile.group.clone(),
            profile.project.clone(),
        )?;

        let executor = QueryExecutor::new(&self.store);
        let documents =
            executor.aggregate(&profile.collection, &pipeline, AggregateOptions::default())?;
        let records_filtered = executor.count_filtered(&profile.collection, &pipeline)?;
        let records_total = executor.count_all(&profile.collection)?;

        let data = shape_rows(&profile.columns, &documents)?;

        Logger::info(
            "grid_query",
            &[
                ("table", table),
                ("rows", &data.len().to_string()),
                ("filtered", &records_filtered.to_string()),
                ("total", &records_total.to_string()),
            ],
        );

        Ok(GridResponse {
            draw: request.draw,
            records_total,
            records_filtered,
            data,
        })
    }

    /// The inline-edit call: a single-field update on one document.
    ///
    /// The column arrives as a display name and must be on the profile's
    /// editable allow-list; everything else is rejected before the store
    /// is touched. Success mirrors whether the stored value changed, so
    /// writing the value a cell already holds reports `success: false`.
    pub fn edit(&self, command: &EditCommand) -> GridResult<EditResponse> {
        let profile = self.profile(&command.table)?;
        let descriptor = profile.columns.require_display(&command.column)?;
        if !descriptor.editable {
            return Err(GridError::ColumnNotEditable(command.column.clone()));
        }

        let outcome = self.store.update_field(
            &profile.collection,
            &profile.primary_key,
            &command.id,
            &descriptor.db,
            Value::String(command.new_value.clone()),
        )?;

        Logger::info(
            "grid_edit",
            &[
                ("table", command.table.as_str()),
                ("id", command.id.as_str()),
                ("column", command.column.as_str()),
                ("modified", &outcome.modified.to_string()),
            ],
        );

        Ok(EditResponse {
            success: outcome.modified != 0,
            value: command.new_value.clone(),
        })
    }
}
