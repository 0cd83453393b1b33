pub mod catalog;
pub mod chat;
pub mod create;
pub mod mock;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use charm_application::{CatalogService, CharacterService, ChatService, MockService};
use charm_core::config::CharmConfig;
use charm_infrastructure::{ConfigService, JsonCharacterRepository};
use serde::Serialize;

/// Services shared by every subcommand, wired over the configured data
/// directory.
pub struct CliContext {
    pub config: CharmConfig,
    pub catalog: Arc<CatalogService>,
    pub characters: CharacterService,
    pub json: bool,
}

impl CliContext {
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>, json: bool) -> Result<Self> {
        let service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new()?,
        };
        let mut config = service
            .get_config()
            .with_context(|| format!("Failed to load {}", service.path().display()))?;
        if data_dir.is_some() {
            config.storage.data_dir = data_dir;
        }

        let repository = Arc::new(JsonCharacterRepository::in_dir(
            config.storage.data_dir.as_deref(),
        )?);
        tracing::debug!(path = %repository.path().display(), "Character store");

        Ok(Self {
            catalog: Arc::new(CatalogService::new(repository.clone())),
            characters: CharacterService::new(repository),
            config,
            json,
        })
    }

    pub fn chat_service(&self) -> Result<ChatService> {
        Ok(ChatService::new(self.catalog.clone())
            .with_delay(self.config.chat.reply_delay()?)
            .with_responses(self.config.chat.response_table()))
    }

    pub fn mock_service(&self) -> MockService {
        MockService::new()
    }

    /// Prints `value` as pretty JSON. Returns false in text mode.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<bool> {
        if !self.json {
            return Ok(false);
        }
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(true)
    }
}
