//! Response envelopes for the grid endpoint.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Grid data response: the draw echo, both counts, and the shaped rows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridResponse {
    /// Client-supplied request sequence number, echoed back
    pub draw: u64,
    /// Unconditional document count of the collection
    pub records_total: u64,
    /// Document count after the match predicate only
    pub records_filtered: u64,
    /// Shaped rows, display field names in descriptor order
    pub data: Vec<Value>,
}

/// Inline-edit response: success mirrors whether anything was modified
#[derive(Debug, Clone, Serialize)]
pub struct EditResponse {
    pub success: bool,
    /// The submitted new value, echoed back for the cell
    pub value: String,
}

/// Fatal diagnostic body.
///
/// When the engine fails mid-request, the entire response body is this
/// bare JSON array of diagnostic strings — message plus source location —
/// and the request terminates with nothing partial emitted.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FatalDiagnostic(Vec<String>);

impl FatalDiagnostic {
    /// Captures the caller's source location as the diagnostic context
    #[track_caller]
    pub fn new(message: impl fmt::Display) -> Self {
        let location = std::panic::Location::caller();
        Self(vec![
            "Exception:".to_string(),
            message.to_string(),
            "In file:".to_string(),
            location.file().to_string(),
            "On line:".to_string(),
            location.line().to_string(),
        ])
    }
}
