//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its stored URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Responds `302 Found` with the stored URL in the `Location` header. The
/// URL is stored as the client supplied it; no rewriting happens on the way
/// out.
///
/// # Errors
///
/// Returns 404 Not Found if the id has no mapping.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.url_service.get(&id)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, entry.url)]))
}
