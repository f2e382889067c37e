//! Column subsystem errors.

use thiserror::Error;

/// Result type for column operations
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Errors raised while resolving or formatting columns
#[derive(Debug, Clone, Error)]
pub enum ColumnError {
    /// A display name with no descriptor backing it. This is a caller or
    /// configuration bug, not a recoverable runtime condition.
    #[error("Unknown display column: {0}")]
    UnknownDisplayColumn(String),

    /// Row-identifier formatter got a value that cannot name a document
    #[error("Malformed identifier value: {0}")]
    MalformedIdentifier(String),

    /// Epoch-date formatter got a value that is not epoch seconds
    #[error("Malformed timestamp value: {0}")]
    MalformedTimestamp(String),
}

impl ColumnError {
    /// Formatter failures abort the whole response; lookup failures are
    /// rejected back to the caller.
    pub fn is_formatter_failure(&self) -> bool {
        matches!(
            self,
            ColumnError::MalformedIdentifier(_) | ColumnError::MalformedTimestamp(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatter_failures_classified() {
        assert!(ColumnError::MalformedIdentifier("x".into()).is_formatter_failure());
        assert!(ColumnError::MalformedTimestamp("x".into()).is_formatter_failure());
        assert!(!ColumnError::UnknownDisplayColumn("x".into()).is_formatter_failure());
    }
}
