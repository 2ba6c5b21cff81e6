use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};

/// Shared application state injected into every handler.
///
/// Constructed once in [`crate::server::run`] and cloned per request; the
/// services (and the store behind them) are shared through `Arc`, never
/// reached through a global.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub auth_service: Arc<AuthService>,
}
