//! Web layer: server-rendered landing page.

pub mod handlers;
