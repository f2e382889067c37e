//! HTTP server assembly.
//!
//! Builds the axum router from the grid service and the bind/CORS config,
//! and runs it to completion.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::grid::GridService;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::grid_routes::{grid_routes, GridState};
use super::observability_routes::health_routes;

/// The HTTP front of the grid service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: GridService) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, service: GridService) -> Router {
        let state = Arc::new(GridState::new(service));

        // Empty origin list means permissive, for development
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(grid_routes(state))
            .layer(cors)
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router, for in-process testing without a socket
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the process exits
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("server_start", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
