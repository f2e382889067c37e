//! Builds the aggregation pipeline from a parsed grid request.
//!
//! This is the translation table at the heart of the adapter: paging,
//! single-column sort, global search, and per-column search become the
//! match/sort/skip/limit stages; group and project come from the table
//! profile and pass through untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::columns::ColumnTable;
use crate::grid::{GridRequest, OrderDirection};

use super::errors::PipelineResult;
use super::stages::{
    ClauseValue, FieldClause, GroupSpec, MatchPredicate, Pipeline, ProjectSpec, SortSpec,
};

/// Storage field that gets date/time search-term parsing
pub const TIME_FIELD: &str = "time";

/// Translates grid requests into pipelines for one descriptor table
pub struct PipelineBuilder<'a> {
    columns: &'a ColumnTable,
}

impl<'a> PipelineBuilder<'a> {
    pub fn new(columns: &'a ColumnTable) -> Self {
        Self { columns }
    }

    /// Assembles the pipeline. Stage order is fixed: match, group, sort,
    /// skip, limit, project. Skip and limit are emitted even when zero.
    ///
    /// When a group spec is present the view is a distinct view and no
    /// match stage is built at all.
    pub fn build(
        &self,
        request: &GridRequest,
        group: Option<GroupSpec>,
        project: Option<ProjectSpec>,
    ) -> PipelineResult<Pipeline> {
        let match_stage = if group.is_some() {
            None
        } else {
            let predicate = self.build_match(request)?;
            (!predicate.is_empty()).then_some(predicate)
        };

        Ok(Pipeline {
            match_stage,
            group,
            sort: self.resolve_sort(request)?,
            skip: request.start,
            limit: request.length,
            project,
        })
    }

    /// Resolves the sort stage. Only the first order entry is honored;
    /// multi-column sort is unsupported. The entry's column index resolves
    /// through the request's own column list to a display name, then
    /// through the descriptor table to a storage field. A non-orderable
    /// column emits no sort.
    ///
    /// Direction values are inverted relative to the usual convention:
    /// asc maps to -1 and desc to +1. The deployed grid endpoint has always
    /// behaved this way and its consumers calibrate against it, so the
    /// mapping stays until product signs off on changing it (DESIGN.md).
    fn resolve_sort(&self, request: &GridRequest) -> PipelineResult<Option<SortSpec>> {
        let entry = match request.order.first() {
            Some(entry) => entry,
            None => return Ok(None),
        };
        let request_column = match request.columns.get(entry.column_index) {
            Some(column) => column,
            None => return Ok(None),
        };
        if !request_column.orderable {
            return Ok(None);
        }
        let column = self.columns.require_display(&request_column.data)?;
        let direction = match entry.direction {
            OrderDirection::Asc => -1,
            OrderDirection::Desc => 1,
        };
        Ok(Some(SortSpec::new(column.db.clone(), direction)))
    }

    /// Builds the merged match predicate from the global search bar and the
    /// per-column filters. Column entries overwrite global entries sharing
    /// the same key.
    fn build_match(&self, request: &GridRequest) -> PipelineResult<MatchPredicate> {
        let mut predicate = MatchPredicate::default();
        if !request.search.value.is_empty() {
            predicate.any_of = self.global_search(request)?;
        }
        self.column_search(request, &mut predicate)?;
        Ok(predicate)
    }

    /// Global search: one clause per searchable column, OR-ed together
    fn global_search(&self, request: &GridRequest) -> PipelineResult<Vec<FieldClause>> {
        let term = &request.search.value;
        let mut clauses = Vec::new();
        for request_column in &request.columns {
            if !request_column.searchable {
                continue;
            }
            let column = self.columns.require_display(&request_column.data)?;
            clauses.push(FieldClause::new(
                column.db.clone(),
                clause_value(term, request_column.search.regex),
            ));
        }
        Ok(clauses)
    }

    /// Per-column search: conjunctive clauses keyed by storage field.
    ///
    /// The `time` column ends column-search processing either way: a parsed
    /// term becomes an epoch-seconds clause, an unparseable term drops the
    /// remaining column filters of the request on the floor. Long-standing
    /// endpoint behavior, kept deliberately (DESIGN.md).
    fn column_search(
        &self,
        request: &GridRequest,
        predicate: &mut MatchPredicate,
    ) -> PipelineResult<()> {
        for request_column in &request.columns {
            let term = &request_column.search.value;
            if !request_column.searchable || term.is_empty() {
                continue;
            }
            let column = self.columns.require_display(&request_column.data)?;
            if column.db == TIME_FIELD {
                if let Some(epoch) = parse_time_term(term) {
                    predicate
                        .all_of
                        .insert(column.db.clone(), ClauseValue::Number(epoch));
                }
                break;
            }
            predicate.all_of.insert(
                column.db.clone(),
                clause_value(term, request_column.search.regex),
            );
        }
        Ok(())
    }
}

/// Resolves a search term into a clause: numeric terms compare as numbers,
/// regex-flagged terms become substring patterns, everything else is an
/// exact string match.
fn clause_value(term: &str, regex: bool) -> ClauseValue {
    if let Ok(n) = term.parse::<i64>() {
        return ClauseValue::Number(n);
    }
    // Fractional terms compare against their integer part, matching the
    // integer coercion the legacy endpoint applied to numeric input.
    if let Ok(f) = term.parse::<f64>() {
        if f.is_finite() {
            return ClauseValue::Number(f.trunc() as i64);
        }
    }
    if regex {
        ClauseValue::contains(term)
    } else {
        ClauseValue::Text(term.to_string())
    }
}

/// Parses a free-form date/time search term into epoch seconds.
/// Accepted shapes: RFC 3339, `Y-m-d H:M:S`, `Y-m-d` (midnight UTC).
fn parse_time_term(term: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(term) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(term, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(term, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}
