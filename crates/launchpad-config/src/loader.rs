use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::schema::LaunchpadConfig;

/// Loads the Launchpad configuration once at startup. The config is fixed
/// for the life of the process; there is no reload.
#[derive(Debug)]
pub struct ConfigLoader {
    config: LaunchpadConfig,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > LAUNCHPAD_CONFIG env >
    /// ~/.launchpad/launchpad.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("LAUNCHPAD_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".launchpad")
            .join("launchpad.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> launchpad_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<LaunchpadConfig>(&raw).map_err(|e| {
                launchpad_core::LaunchpadError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            LaunchpadConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> LaunchpadConfig {
        self.config.clone()
    }

    /// Path the config was loaded from (or would have been).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (LAUNCHPAD_SERVER_LISTEN, LAUNCHPAD_LOG_LEVEL).
    fn apply_env_overrides(mut config: LaunchpadConfig) -> LaunchpadConfig {
        if let Ok(v) = std::env::var("LAUNCHPAD_SERVER_LISTEN") {
            config.server.listen = v;
        }
        if let Ok(v) = std::env::var("LAUNCHPAD_LOG_LEVEL") {
            config.logging.level = v;
        }
        config
    }
}
