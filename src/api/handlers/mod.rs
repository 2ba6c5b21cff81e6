//! HTTP request handlers.

pub mod health;
pub mod redirect;
pub mod shortened_urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shortened_urls::{
    create_handler, delete_handler, get_handler, list_handler, upsert_handler,
};
