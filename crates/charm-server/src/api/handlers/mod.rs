//! API handlers

mod characters;
mod chat;
mod health;
mod mock;

pub use characters::*;
pub use chat::*;
pub use health::*;
pub use mock::*;

use axum::http::header::{self, HeaderName};

/// Headers telling clients and proxies not to cache list responses.
pub(crate) const NO_CACHE: [(HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];
