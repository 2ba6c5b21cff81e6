//! REST API layer: handlers, DTOs, request extraction, and middleware.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
