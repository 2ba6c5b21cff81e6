#![allow(dead_code)]

use std::sync::Arc;

use urlmap::application::services::{AuthService, UrlService};
use urlmap::domain::store::UrlStore;
use urlmap::state::AppState;

pub const TEST_TOKEN: &str = "nw4869";

/// State with the standard seed mapping (`nw` → `https://nightwind.me`)
/// and the default test token.
pub fn create_test_state() -> AppState {
    create_test_state_with(
        [("nw", "https://nightwind.me")],
        [TEST_TOKEN.to_string()],
    )
}

/// State with explicit seed entries and token set.
pub fn create_test_state_with<I>(
    entries: I,
    tokens: impl IntoIterator<Item = String>,
) -> AppState
where
    I: IntoIterator<Item = (&'static str, &'static str)>,
{
    let store = Arc::new(UrlStore::from_entries(entries));

    AppState {
        url_service: Arc::new(UrlService::new(store)),
        auth_service: Arc::new(AuthService::new(tokens)),
    }
}
