//! Access token verification for mutating endpoints.

use std::collections::HashSet;

use serde_json::json;

use crate::error::AppError;

/// Service holding the process-wide set of valid access tokens.
///
/// The set is loaded once at startup and is immutable at runtime. Tokens
/// travel as a request body field on mutating endpoints; handlers call
/// [`AuthService::authorize`] before touching the store, replacing the
/// wrap-the-handler style of authentication with an explicit guard.
pub struct AuthService {
    tokens: HashSet<String>,
}

impl AuthService {
    /// Creates the service from the configured token set.
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Returns true iff `token` is a member of the access token set.
    ///
    /// Pure membership test, no side effects. Empty or unrecognized tokens
    /// are always false.
    pub fn verify_token(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Authorizes a mutating request from its parsed `token` field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the token is missing or not
    /// in the configured set. The token value is never echoed back.
    pub fn authorize(&self, token: Option<&str>) -> Result<(), AppError> {
        match token {
            Some(token) if self.verify_token(token) => Ok(()),
            _ => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Missing or invalid token" }),
            )),
        }
    }
}
