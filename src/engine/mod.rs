//! Query engine subsystem
//!
//! The embedded document store plus the executor that runs built pipelines
//! and the two auxiliary count queries against it.

mod errors;
mod executor;
mod matcher;
mod store;

pub use errors::{EngineError, EngineResult};
pub use executor::{AggregateOptions, QueryExecutor};
pub use matcher::{matches_like_pattern, matches_predicate};
pub use store::{DocumentStore, UpdateOutcome, ID_FIELD};
