//! HTTP implementation of the song service.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use songfeed_core::{Error, HttpError, Result, SongsResponse};
use tracing::{debug, warn};
use url::Url;

use crate::config::ServiceConfig;
use crate::service::SongService;

/// Song service client backed by `reqwest`.
///
/// Failures are reported as-is: there is no retry and no response cache.
#[derive(Clone)]
pub struct SongServiceClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Resolved feed endpoint.
    songs_url: Url,
}

impl SongServiceClient {
    /// Create a new client for the configured service.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::InvalidArgument(format!("Invalid user agent: {e}")))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .pool_max_idle_per_host(4)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            songs_url: config.songs_url()?,
        })
    }

    /// The endpoint this client fetches the feed from.
    pub const fn songs_url(&self) -> &Url {
        &self.songs_url
    }

    /// Fetch the song feed.
    pub async fn fetch_songs(&self) -> Result<SongsResponse> {
        debug!("Fetching songs from {}", self.songs_url);

        let body = self.do_request(self.songs_url.as_str()).await.map_err(|e| {
            warn!("Request to {} failed: {e}", self.songs_url);
            e
        })?;

        let response: SongsResponse = serde_json::from_slice(&body)
            .map_err(|e| Error::ParseError(format!("Failed to parse songs response: {e}")))?;

        debug!("Received {} songs", response.len());
        Ok(response)
    }

    async fn do_request(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Http(HttpError::StatusError {
                status: status.as_u16(),
                message,
            }));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Http(HttpError::Timeout)
                } else {
                    Error::Network(format!("Failed to read response body: {e}"))
                }
            })
    }
}

impl SongService for SongServiceClient {
    async fn get_songs(&self) -> Result<SongsResponse> {
        self.fetch_songs().await
    }
}
