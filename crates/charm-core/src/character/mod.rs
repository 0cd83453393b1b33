//! Character domain module.
//!
//! This module contains all character-related domain models, repository
//! interfaces, and the built-in catalog.
//!
//! # Module Structure
//!
//! - `model`: Core character domain models (`Character`, `CharacterSource`, `Visibility`)
//! - `repository`: Repository trait for user-created character persistence
//! - `preset`: Built-in catalog characters
//! - `request`: Creation request and its validation
//!
//! # Usage
//!
//! ```ignore
//! use charm_core::character::{Character, CharacterRepository, default_characters};
//! ```

mod model;
mod preset;
mod repository;
pub mod request;

// Re-export public API
pub use model::{Character, CharacterSource, DEFAULT_IMAGE_URL, Visibility};
pub use preset::{default_characters, featured_character_ids, featured_characters};
pub use repository::CharacterRepository;
pub use request::CreateCharacterRequest;
