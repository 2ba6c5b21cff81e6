//! Handlers for the shortened URL CRUD endpoints.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shortened_url::{CreateRequest, DeleteRequest, UpsertRequest};
use crate::api::extract::JsonOrForm;
use crate::domain::entry::Entry;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every current mapping.
///
/// # Endpoint
///
/// `GET /api/v1/shortened_urls`
///
/// # Response
///
/// 200 with the full mapping as an object keyed by id:
///
/// ```json
/// {
///   "nw": { "id": "nw", "url": "https://nightwind.me" }
/// }
/// ```
pub async fn list_handler(State(state): State<AppState>) -> Json<HashMap<String, Entry>> {
    Json(state.url_service.list())
}

/// Retrieves a single mapping by id.
///
/// # Endpoint
///
/// `GET /api/v1/shortened_urls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id has no mapping.
pub async fn get_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Entry>, AppError> {
    let entry = state.url_service.get(&id)?;
    Ok(Json(entry))
}

/// Creates a mapping, allocating an id when the client omits one.
///
/// # Endpoint
///
/// `POST /api/v1/shortened_urls`
///
/// Accepts JSON or form bodies with field `url` and optional field `id`.
/// No token is required. Responds 201 with the resulting entry.
///
/// # Errors
///
/// Returns 400 if `url` is missing or empty, if a provided `id` is empty,
/// or if a provided `id` is already taken (message names the id).
pub async fn create_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateRequest>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    payload.validate()?;
    let url = require_url(payload.url)?;

    let entry = state.url_service.create(payload.id, url)?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Inserts or replaces the mapping at `id`.
///
/// # Endpoint
///
/// `PUT /api/v1/shortened_urls/{id}`
///
/// Requires body field `token`; the authorization check runs before the
/// payload is validated, so a bad token is reported even when `url` is
/// missing. Responds 201 with the resulting entry whether the id was new
/// or replaced.
///
/// # Errors
///
/// Returns 401 on a missing or invalid token, 400 on a missing or empty
/// `url`.
pub async fn upsert_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<UpsertRequest>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    state.auth_service.authorize(payload.token.as_deref())?;

    payload.validate()?;
    let url = require_url(payload.url)?;

    let entry = state.url_service.upsert(&id, &url);

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Deletes the mapping at `id`.
///
/// # Endpoint
///
/// `DELETE /api/v1/shortened_urls/{id}`
///
/// Requires body field `token`; the authorization check runs before the
/// existence check. Responds 204 with an empty body on success.
///
/// # Errors
///
/// Returns 401 on a missing or invalid token, 404 if the id has no mapping.
pub async fn delete_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<DeleteRequest>,
) -> Result<StatusCode, AppError> {
    state.auth_service.authorize(payload.token.as_deref())?;

    state.url_service.delete(&id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Extracts the required `url` field from an already-validated payload.
fn require_url(url: Option<String>) -> Result<String, AppError> {
    url.ok_or_else(|| AppError::bad_request("Field 'url' is required", json!({})))
}
