//! API route configuration.
//!
//! Mutating endpoints carry their access token as a body field and are
//! authorized in the handler via
//! [`crate::application::services::AuthService::authorize`].

use axum::{Router, routing::get};

use crate::api::handlers::{
    create_handler, delete_handler, get_handler, list_handler, upsert_handler,
};
use crate::state::AppState;

/// Routes nested under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /shortened_urls`       - List every mapping, keyed by id
/// - `POST   /shortened_urls`       - Create a mapping (auto-allocates an id
///   when none is given)
/// - `GET    /shortened_urls/{id}`  - Fetch one mapping
/// - `PUT    /shortened_urls/{id}`  - Insert or replace a mapping (token required)
/// - `DELETE /shortened_urls/{id}`  - Delete a mapping (token required)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shortened_urls", get(list_handler).post(create_handler))
        .route(
            "/shortened_urls/{id}",
            get(get_handler).put(upsert_handler).delete(delete_handler),
        )
}
