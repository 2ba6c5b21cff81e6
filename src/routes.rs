//! Top-level router configuration combining API, redirect, and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{id}`       - Short link redirect (public)
//! - `GET  /health`     - Health check with entry count (public)
//! - `/api/v1/*`        - REST API (mutations require a body token)
//! - `GET|POST /`       - Landing page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::home_handler;

/// Constructs the application router with all routes and middleware.
///
/// `state` is the shared application state injected into all handlers.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler).post(home_handler))
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/api/v1", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
