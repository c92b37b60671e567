//! REST API over the compatibility store and estimator.
//!
//! Query endpoints:
//! - `GET /services` — service list in source order
//! - `GET /metadata` — dataset provenance
//! - `GET /compatibility` — one pair, one mode
//! - `GET /requirements/{service}` — technical requirements
//! - `POST /stack` — all-pairs check over a selection
//! - `POST /estimate` — deterministic value estimate

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::config::ScenarioConfig;
use crate::data::CompatibilityStore;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the dataset load completes and wrapped in
/// `Arc` — no locks needed since the snapshot is read-only for the
/// process lifetime.
pub struct AppState {
    /// The load-once stacking dataset.
    pub store: CompatibilityStore,
    /// Default estimator scenario for this deployment.
    pub scenario: ScenarioConfig,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/services", get(handlers::get_services))
        .route("/metadata", get(handlers::get_metadata))
        .route("/compatibility", get(handlers::get_compatibility))
        .route("/requirements/{service}", get(handlers::get_requirements))
        .route("/stack", post(handlers::post_stack))
        .route("/estimate", post(handlers::post_estimate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
