//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every section and
//! field falls back to its default when absent.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::{ReplyDelay, ResponseTable};
use crate::error::{CharmError, Result};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4000";

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharmConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub chat: ChatConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Allow cross-origin requests from any origin
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            cors: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            CharmError::config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Idle chat sessions are dropped after this many seconds
    pub session_idle_secs: u64,
    pub max_sessions: usize,
    /// Extra or replacement canned replies, keyed by category
    pub responses: BTreeMap<String, Vec<String>>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        let delay = ReplyDelay::default();
        Self {
            min_delay_ms: delay.min_ms,
            max_delay_ms: delay.max_ms,
            session_idle_secs: 30 * 60,
            max_sessions: 1000,
            responses: BTreeMap::new(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Result<ReplyDelay> {
        ReplyDelay::new(self.min_delay_ms, self.max_delay_ms)
    }

    pub fn response_table(&self) -> ResponseTable {
        ResponseTable::with_overrides(&self.responses)
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    fn validate_sessions(&self) -> Result<()> {
        if self.session_idle_secs == 0 {
            return Err(CharmError::config("chat.session_idle_secs must be positive"));
        }
        if self.max_sessions == 0 {
            return Err(CharmError::config("chat.max_sessions must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl CharmConfig {
    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.server.socket_addr()?;
        self.chat.reply_delay()?;
        self.chat.validate_sessions()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CharmConfig::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:4000");
        assert!(config.server.cors);
        assert_eq!(config.chat.min_delay_ms, 1000);
        assert_eq!(config.chat.max_delay_ms, 2000);
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let raw = r#"
            [chat]
            max_delay_ms = 500
            min_delay_ms = 100

            [chat.responses]
            sports = ["Game on!"]
        "#;
        let config: CharmConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.chat.max_delay_ms, 500);
        assert_eq!(
            config.chat.response_table().lookup(Some("Sports")),
            ["Game on!".to_string()]
        );
    }

    #[test]
    fn test_validate_rejects_inverted_delay() {
        let mut config = CharmConfig::default();
        config.chat.min_delay_ms = 3000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_address() {
        let mut config = CharmConfig::default();
        config.server.listen_addr = "not-an-address".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CharmError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_zero_session_limits() {
        let mut config = CharmConfig::default();
        assert_eq!(config.chat.session_idle_ttl(), Duration::from_secs(1800));
        config.chat.max_sessions = 0;
        assert!(matches!(config.validate(), Err(CharmError::Config(_))));

        let mut config = CharmConfig::default();
        config.chat.session_idle_secs = 0;
        assert!(config.validate().is_err());
    }
}
