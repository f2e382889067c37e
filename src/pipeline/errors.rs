//! Pipeline builder errors.

use thiserror::Error;

use crate::columns::ColumnError;

/// Result type for pipeline construction
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors raised while translating a request into a pipeline
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// Column resolution failed (caller/configuration bug)
    #[error("{0}")]
    Column(#[from] ColumnError),
}
