//! Configuration service implementation.
//!
//! Loads [`CharmConfig`] from `config.toml` (by default
//! `~/.config/charm/config.toml`) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use charm_core::config::CharmConfig;
use charm_core::error::{CharmError, Result};

use crate::paths::CharmPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<CharmConfig>>>,
}

impl ConfigService {
    /// Service reading the default config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(CharmPaths::config_file()?))
    }

    /// Service reading an explicit file (for testing or `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file yields defaults; a malformed or invalid one is an error.
    pub fn get_config(&self) -> Result<CharmConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| CharmError::internal("config cache poisoned"))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(&self.path)?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| CharmError::internal("config cache poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_from(path: &Path) -> Result<CharmConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(CharmConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CharmConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
