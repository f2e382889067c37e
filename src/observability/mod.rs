//! Observability
//!
//! Structured JSON logging only. Logging is synchronous, read-only, and
//! never changes request outcomes.

mod logger;

pub use logger::{Logger, Severity};

#[cfg(test)]
pub use logger::capture_log;
