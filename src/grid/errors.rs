//! Grid endpoint errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::columns::ColumnError;
use crate::engine::EngineError;
use crate::observability::Logger;
use crate::pipeline::PipelineError;

use super::envelope::FatalDiagnostic;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised on the grid data and inline-edit paths
#[derive(Debug, Clone, Error)]
pub enum GridError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing required parameter
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    /// Unknown table name in the `tables` parameter
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Inline edit targeting a column outside the editable allow-list
    #[error("Column is not editable: {0}")]
    ColumnNotEditable(String),

    /// Column resolution or formatting failed
    #[error("{0}")]
    Column(#[from] ColumnError),

    /// Pipeline construction failed
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    // ==================
    // Fatal (5xx)
    // ==================
    /// Engine failure; the response body becomes a diagnostic array
    #[error("{0}")]
    Engine(#[from] EngineError),
}

impl GridError {
    /// Engine failures and formatter failures take the fatal
    /// diagnostic-body path; everything else is an ordinary rejection.
    pub fn is_fatal(&self) -> bool {
        match self {
            GridError::Engine(_) => true,
            GridError::Column(inner) => inner.is_formatter_failure(),
            GridError::Pipeline(_) => false,
            _ => false,
        }
    }

    /// HTTP status for the non-fatal rejection path
    pub fn status_code(&self) -> StatusCode {
        match self {
            GridError::MissingParam(_) => StatusCode::BAD_REQUEST,
            GridError::ColumnNotEditable(_) => StatusCode::BAD_REQUEST,
            GridError::Column(_) => StatusCode::BAD_REQUEST,
            GridError::Pipeline(_) => StatusCode::BAD_REQUEST,
            GridError::UnknownTable(_) => StatusCode::NOT_FOUND,
            GridError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Rejection response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GridError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        if self.is_fatal() {
            Logger::error("grid_fatal", &[("message", message.as_str())]);
            // Entire body is the diagnostic array; nothing partial.
            let body = Json(FatalDiagnostic::new(&self));
            return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        }
        let status = self.status_code();
        let code = status.as_u16().to_string();
        Logger::warn(
            "grid_rejected",
            &[("code", code.as_str()), ("message", message.as_str())],
        );
        let body = Json(ErrorResponse {
            error: message,
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            GridError::MissingParam("id").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GridError::UnknownTable("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GridError::Engine(EngineError::NotAnObject).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn fatal_response_is_internal_error() {
        let response = GridError::Engine(EngineError::NotAnObject).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rejection_response_carries_status() {
        let response = GridError::UnknownTable("ghost".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn fatal_classification() {
        assert!(GridError::Engine(EngineError::NotAnObject).is_fatal());
        assert!(GridError::Column(ColumnError::MalformedTimestamp("x".into())).is_fatal());
        assert!(!GridError::Column(ColumnError::UnknownDisplayColumn("x".into())).is_fatal());
        assert!(!GridError::MissingParam("id").is_fatal());
    }
}
