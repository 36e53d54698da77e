//! Song service client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use songfeed_core::{Error, Result};
use url::Url;

/// Path of the feed endpoint, relative to the base URL.
pub const SONGS_ENDPOINT: &str = "songs";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = DEFAULT_TIMEOUT_SECS * 1000;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("SongFeed/", env!("CARGO_PKG_VERSION"));

/// Where the song service lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (e.g. `https://api.example.com/v1/`).
    pub base_url: Url,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl ServiceConfig {
    /// Create a configuration for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let config = Self {
            base_url: Url::parse(base_url)?,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: default_user_agent(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the request timeout.
    ///
    /// Stored with millisecond precision; a nonzero timeout below one
    /// millisecond rounds up so it never turns into zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.timeout_ms = if ms == 0 && !timeout.is_zero() { 1 } else { ms };
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check that the configuration can be used to make requests.
    pub fn validate(&self) -> Result<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unsupported URL scheme `{other}` in {}",
                    self.base_url
                )))
            }
        }

        if self.timeout_ms == 0 {
            return Err(Error::InvalidArgument(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL of the feed endpoint.
    ///
    /// A base without a trailing slash is treated as a directory, so
    /// `https://host/api` and `https://host/api/` both resolve to
    /// `https://host/api/songs`.
    pub fn songs_url(&self) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(SONGS_ENDPOINT)?)
    }
}
