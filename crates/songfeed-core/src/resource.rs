//! Load-state wrapper published to observers of an asynchronous fetch.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Loading,
    Success,
    Error,
}

/// State of one load attempt.
///
/// A payload exists only in `Success`; a message exists only in `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource<T> {
    /// The request is in flight.
    Loading,
    /// The request completed with a value.
    Success(T),
    /// The request failed; `message` is the failure's display text.
    Error { message: String },
}

impl<T> Resource<T> {
    pub const fn loading() -> Self {
        Self::Loading
    }

    pub const fn success(data: T) -> Self {
        Self::Success(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Build a terminal state from a finished operation.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }

    pub const fn status(&self) -> Status {
        match self {
            Self::Loading => Status::Loading,
            Self::Success(_) => Status::Success,
            Self::Error { .. } => Status::Error,
        }
    }

    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether this state ends a load attempt.
    pub const fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success(data) => Resource::Success(f(data)),
            Self::Error { message } => Resource::Error { message },
        }
    }
}
