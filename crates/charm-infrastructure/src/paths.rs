//! Unified path management for charm files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/charm/             # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/charm/        # Data directory (overridable)
//! └── characters.json          # User-created characters
//! ```

use std::path::{Path, PathBuf};

use charm_core::error::{CharmError, Result};

const APP_DIR: &str = "charm";
const CONFIG_FILE: &str = "config.toml";
const CHARACTERS_FILE: &str = "characters.json";

/// Resolves charm paths, optionally rooted at an explicit data directory.
#[derive(Debug, Clone, Default)]
pub struct CharmPaths {
    data_dir_override: Option<PathBuf>,
}

impl CharmPaths {
    /// Creates a resolver. `None` uses the platform data directory.
    pub fn new(data_dir: Option<&Path>) -> Self {
        Self {
            data_dir_override: data_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the charm configuration directory (e.g. `~/.config/charm/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| CharmError::config("Cannot find config directory"))
    }

    /// Returns the default configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the data directory, honoring the override.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| CharmError::config("Cannot find data directory"))
    }

    /// Returns the file holding user-created characters.
    pub fn characters_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(CHARACTERS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_used() {
        let paths = CharmPaths::new(Some(Path::new("/tmp/charm-test")));
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/charm-test"));
        assert_eq!(
            paths.characters_file().unwrap(),
            PathBuf::from("/tmp/charm-test/characters.json")
        );
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = CharmPaths::config_file() {
            assert!(path.ends_with("charm/config.toml"));
        }
    }
}
