//! Request body extraction accepting JSON or urlencoded form payloads.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Extracts `T` from a JSON or `application/x-www-form-urlencoded` body,
/// chosen by the request's `Content-Type`.
///
/// Clients of this API submit both encodings, so every body-carrying
/// endpoint goes through this extractor. A body that fails to deserialize
/// (missing required field, malformed payload, unsupported content type)
/// is rejected with the Validation condition (HTTP 400) before the handler
/// runs.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
            })?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
        })?;
        Ok(Self(value))
    }
}
