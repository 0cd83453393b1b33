//! Application layer for CHARM.
//!
//! Use cases that combine the built-in catalog, the character repository
//! and the canned-response chat into the operations the server and CLI
//! expose.

pub mod catalog_service;
pub mod character_service;
pub mod chat_service;
pub mod mock_service;

pub use catalog_service::CatalogService;
pub use character_service::CharacterService;
pub use chat_service::{ChatExchange, ChatService, SessionLimits};
pub use mock_service::MockService;
