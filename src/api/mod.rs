//! HTTP server for the metric-to-verdict pipeline
//!
//! ## Endpoints
//!
//! - `GET /aiops/check` - Run one anomaly check against the current host state
//! - `GET /metrics` - Monitoring registry in exposition text format
//! - `GET /health` - Health check

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use state::ApiState;
pub use types::{CheckResponse, HealthResponse};

use std::net::SocketAddr;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (e.g., "0.0.0.0:8080")
    pub bind_addr: SocketAddr,
}

/// Build the router with all routes.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/aiops/check", get(routes::check::run_check))
        .route("/metrics", get(routes::metrics::exposition))
        .route("/health", get(routes::health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Spawn the API server
///
/// This starts an Axum HTTP server in a background task.
/// Returns the server's local address.
pub async fn spawn_api_server(config: ApiConfig, state: ApiState) -> anyhow::Result<SocketAddr> {
    info!("starting API server on {}", config.bind_addr);

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("API server listening on {}", addr);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok(addr)
}
