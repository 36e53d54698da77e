//! Application configuration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use songfeed_core::{Error, Result};
use songfeed_service::config::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use songfeed_service::ServiceConfig;
use tracing::{debug, info};

/// Environment variable that overrides the service URL.
pub const SERVICE_URL_ENV: &str = "SONGFEED_SERVICE_URL";

const CONFIG_FILE: &str = "config.json";
const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/";
const DEFAULT_APP_NAME: &str = "SongFeed";

/// Settings read from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the song service.
    pub service_url: String,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Name used in share text and the screen header.
    pub app_name: String,
    /// User agent sent to the service.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            app_name: DEFAULT_APP_NAME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "songfeed", "SongFeed")
            .ok_or_else(|| Error::Config("Failed to determine config directory".to_string()))?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, then apply the environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path()?)?;
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            debug!("Service URL overridden by {SERVICE_URL_ENV}");
            config.service_url = url;
        }
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Invalid config {}: {e}", path.display())))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Build the validated service client configuration.
    pub fn to_service_config(&self) -> Result<ServiceConfig> {
        let config = ServiceConfig {
            base_url: self.service_url.parse()?,
            timeout_ms: self.request_timeout_secs.saturating_mul(1000),
            user_agent: self.user_agent.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}
