//! gridserve - a grid query endpoint over an embedded document store
//!
//! Translates the grid wire protocol (draw/paging/search/order parameter
//! families) into aggregation pipelines, executes them against in-memory
//! collections, and shapes documents into display rows. Inline edits ride
//! the same endpoint behind an `edit` flag.

pub mod cli;
pub mod columns;
pub mod config;
pub mod engine;
pub mod grid;
pub mod http_server;
pub mod observability;
pub mod pipeline;
