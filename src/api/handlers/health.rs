//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and the current entry count.
///
/// # Endpoint
///
/// `GET /health`
///
/// The store is in-memory with no external collaborators, so a responding
/// process is a healthy process; the entry count is reported for operators.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "entries": 1
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        entries: state.url_service.entry_count(),
    })
}
