//! Pipeline builder subsystem
//!
//! Translates a parsed grid request plus a column descriptor table into an
//! aggregation pipeline: match, group, sort, skip, limit, project, in that
//! fixed order.

mod builder;
mod errors;
mod stages;

pub use builder::{PipelineBuilder, TIME_FIELD};
pub use errors::{PipelineError, PipelineResult};
pub use stages::{
    ClauseValue, FieldClause, GroupSpec, MatchPredicate, Pipeline, ProjectField, ProjectSpec,
    SortSpec,
};
