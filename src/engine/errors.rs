//! Engine error types.
//!
//! Any engine-level failure is treated as fatal for the request that hit
//! it: the HTTP layer turns it into a diagnostic body and emits nothing
//! partial.

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the embedded store and executor
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A writer panicked while holding the store lock
    #[error("Store lock poisoned during {0}")]
    LockPoisoned(&'static str),

    /// Documents must be JSON objects
    #[error("Document is not a JSON object")]
    NotAnObject,
}
