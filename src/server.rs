//! HTTP server initialization and runtime setup.
//!
//! Builds the store and services, wires them into the router, and runs the
//! Axum server until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{AuthService, UrlService};
use crate::config::Config;
use crate::domain::store::UrlStore;
use crate::routes::app_router;
use crate::state::AppState;

/// Mappings present when the process starts.
const SEED_ENTRIES: &[(&str, &str)] = &[("nw", "https://nightwind.me")];

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory [`UrlStore`], pre-seeded with [`SEED_ENTRIES`]
/// - [`UrlService`] and [`AuthService`]
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(UrlStore::from_entries(SEED_ENTRIES.iter().copied()));
    tracing::info!("Store initialized with {} entries", store.len());

    let url_service = Arc::new(UrlService::new(store));
    let auth_service = Arc::new(AuthService::new(config.api_tokens.clone()));

    let state = AppState {
        url_service,
        auth_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutting down");
}
