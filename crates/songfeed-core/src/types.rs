//! Core domain types for SongFeed.

pub mod response;
pub mod song;

pub use response::SongsResponse;
pub use song::{Creator, Song};
