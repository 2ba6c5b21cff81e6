//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html` with a form for creating short links
/// against the API.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /` and `POST /`
///
/// Both methods serve the same static page; the page itself never reaches
/// into the store.
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate {}
}
