//! HTTP server module.
//!
//! Axum router plus bind/CORS configuration. One GET endpoint serves the
//! grid; `/health` answers liveness probes.

pub mod config;
pub mod grid_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
