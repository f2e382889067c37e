//! Grid endpoint domain.
//!
//! Everything between the HTTP handler and the engine: request parsing,
//! edit command extraction, response envelopes, row shaping, the error
//! taxonomy, and the service that ties them together.

mod edit;
mod envelope;
mod errors;
mod request;
mod rows;
mod service;

pub use edit::{EditCommand, EDIT_FLAG};
pub use envelope::{EditResponse, FatalDiagnostic, GridResponse};
pub use errors::{ErrorResponse, GridError, GridResult};
pub use request::{GridRequest, OrderDirection, OrderEntry, RequestColumn, SearchTerm};
pub use rows::shape_rows;
pub use service::GridService;
