//! Configuration for charmd
//!
//! Precedence: built-in defaults, then `config.toml`, then CLI flags and
//! their `CHARM_*` environment variables.

use std::path::{Path, PathBuf};

use charm_core::config::CharmConfig;
use charm_infrastructure::ConfigService;

use crate::error::DaemonResult;

/// Values supplied on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub listen_addr: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub no_cors: bool,
}

impl Overrides {
    pub fn apply(self, mut config: CharmConfig) -> CharmConfig {
        if let Some(addr) = self.listen_addr {
            config.server.listen_addr = addr;
        }
        if let Some(dir) = self.data_dir {
            config.storage.data_dir = Some(dir);
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if self.log_json {
            config.log.json = true;
        }
        if self.no_cors {
            config.server.cors = false;
        }
        config
    }
}

/// Loads the config file (default location unless `path` is given) and
/// applies overrides. The merged result is validated again.
pub fn load(path: Option<&Path>, overrides: Overrides) -> DaemonResult<CharmConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let config = overrides.apply(service.get_config()?);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nlisten_addr = \"0.0.0.0:9000\"\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load(
            Some(&path),
            Overrides {
                listen_addr: Some("127.0.0.1:5000".to_string()),
                no_cors: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "127.0.0.1:5000");
        assert!(!config.server.cors);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = load(
            Some(&temp_dir.path().join("missing.toml")),
            Overrides {
                listen_addr: Some("not an address".to_string()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
    }
}
