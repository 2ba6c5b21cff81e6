//! DTOs for the shortened URL CRUD endpoints.
//!
//! Fields the client may omit are `Option` so that authorization and
//! presence checks run in the handler, in that order, instead of failing
//! at deserialization.

use serde::Deserialize;
use validator::Validate;

/// Request to create a mapping, optionally under a client-chosen id.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// Client-chosen id. When omitted, the service allocates a random one.
    pub id: Option<String>,

    /// Target URL for the mapping. Required; checked for presence only.
    #[validate(length(min = 1, message = "Field 'url' must not be empty"))]
    pub url: Option<String>,
}

/// Request to insert or replace the mapping at a known id.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertRequest {
    /// Target URL for the mapping. Required; checked for presence only.
    #[validate(length(min = 1, message = "Field 'url' must not be empty"))]
    pub url: Option<String>,

    /// Access token authorizing the mutation.
    pub token: Option<String>,
}

/// Request to delete the mapping at a known id.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    /// Access token authorizing the mutation.
    pub token: Option<String>,
}
