use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{release_mode, ReleaseMode};
use crate::error::Result;

/// Suffix appended to the next tag while the artifact is a snapshot.
pub const DEFAULT_SNAPSHOT: &str = "-SNAPSHOT";

/// Release mode used when none is configured.
pub const DEFAULT_RELEASE_MODE: &str = "snapshot";

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "versioning.toml";

/// Read-only versioning configuration.
///
/// Owned by whoever loads it; strategies only read from it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    #[serde(default = "default_snapshot")]
    pub snapshot: String,

    #[serde(default = "default_release_mode")]
    pub release_mode: String,
}

fn default_snapshot() -> String {
    DEFAULT_SNAPSHOT.to_string()
}

fn default_release_mode() -> String {
    DEFAULT_RELEASE_MODE.to_string()
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            snapshot: default_snapshot(),
            release_mode: default_release_mode(),
        }
    }
}

impl VersioningConfig {
    /// Suffix marking a pre-release version (e.g. "-SNAPSHOT")
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    /// Resolves the configured release mode name to its strategy.
    pub fn release_mode(&self) -> Result<&'static dyn ReleaseMode> {
        release_mode(&self.release_mode)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioning.toml` in current directory
/// 3. `.versioning.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(VersioningConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<VersioningConfig> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        log::debug!("Loading configuration from {}", path);
        fs::read_to_string(path)?
    } else if local.exists() {
        log::debug!("Loading configuration from {}", local.display());
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            log::debug!("Loading configuration from {}", config_path.display());
            fs::read_to_string(config_path)?
        } else {
            log::debug!("No configuration file found, using defaults");
            return Ok(VersioningConfig::default());
        }
    } else {
        log::debug!("No configuration file found, using defaults");
        return Ok(VersioningConfig::default());
    };

    let config: VersioningConfig = toml::from_str(&config_str)?;
    Ok(config)
}
