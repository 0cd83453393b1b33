pub mod config_service;
pub mod in_memory_character_repository;
pub mod json_character_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_character_repository::InMemoryCharacterRepository;
pub use crate::json_character_repository::JsonCharacterRepository;
pub use crate::paths::CharmPaths;
