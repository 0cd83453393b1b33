//! Application state for API handlers

use std::sync::Arc;

use charm_application::{CatalogService, CharacterService, ChatService, MockService, SessionLimits};
use charm_core::config::ChatConfig;
use charm_core::error::Result;
use charm_core::repository::CharacterRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub characters: Arc<CharacterService>,
    pub chat: Arc<ChatService>,
    pub mock: Arc<MockService>,
    pub version: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Wires the services over one character store.
    pub fn new(repository: Arc<dyn CharacterRepository>, chat: &ChatConfig) -> Result<Self> {
        let catalog = Arc::new(CatalogService::new(repository.clone()));
        let chat = ChatService::new(catalog.clone())
            .with_delay(chat.reply_delay()?)
            .with_responses(chat.response_table())
            .with_limits(SessionLimits::from(chat));

        Ok(Self {
            catalog,
            characters: Arc::new(CharacterService::new(repository)),
            chat: Arc::new(chat),
            mock: Arc::new(MockService::new()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        })
    }

    /// Human-readable uptime, e.g. `1h 2m 3s`.
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds().max(0);
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{hours}h {minutes}m {seconds}s")
        } else if minutes > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{seconds}s")
        }
    }
}
