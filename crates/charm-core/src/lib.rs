//! Domain layer for CHARM.
//!
//! Holds the character catalog, category lists, catalog filtering, the
//! canned-response chat model and the mock character generator. Nothing in
//! this crate touches the file system or the network.

pub mod catalog;
pub mod category;
pub mod character;
pub mod chat;
pub mod config;
pub mod error;
pub mod mock;
pub mod repository;

// Re-export common error type
pub use error::CharmError;
