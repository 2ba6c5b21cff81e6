//! # urlmap
//!
//! A minimal in-memory URL shortener with a token-protected CRUD API, built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation of concerns:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entry::Entry`] record and the
//!   [`domain::store::UrlStore`] keyed collection holding all mappings
//! - **Application Layer** ([`application`]) - Mapping operations and token
//!   verification ([`application::services::UrlService`],
//!   [`application::services::AuthService`])
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and request extraction
//! - **Web Layer** ([`web`]) - Server-rendered landing page
//!
//! ## Features
//!
//! - Short id to URL mapping with upsert semantics
//! - Automatic 4-character hex id allocation with collision retry
//! - Static token authentication for mutating endpoints
//! - 302 redirects from `/{id}` to the stored URL
//!
//! All mappings live in process memory; nothing survives a restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override the defaults
//! export LISTEN="0.0.0.0:3000"
//! export API_TOKENS="my-secret-token"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UrlService};
    pub use crate::domain::entry::Entry;
    pub use crate::domain::store::UrlStore;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
