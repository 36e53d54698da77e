//! Error types for SongFeed.

use thiserror::Error;

/// Result type alias using SongFeed's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for SongFeed.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors carry the transport's own message.
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("{0}")]
    Network(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// HTTP-specific errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("timeout")]
    Timeout,
}
