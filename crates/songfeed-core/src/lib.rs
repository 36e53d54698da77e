//! # songfeed-core
//!
//! Core types, the `Resource` load-state wrapper, and error handling for the
//! SongFeed client.

pub mod error;
pub mod resource;
pub mod types;

pub use error::{Error, HttpError, Result};
pub use resource::{Resource, Status};
pub use types::*;
