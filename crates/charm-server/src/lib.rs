//! CHARM HTTP server library
//!
//! - REST API over the catalog, character creation, mock chat and mock data
//! - Configuration merging for the `charmd` binary
//! - Server lifecycle with graceful shutdown

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use api::{AppState, create_router};
pub use error::{ApiError, DaemonError};
pub use server::Server;
