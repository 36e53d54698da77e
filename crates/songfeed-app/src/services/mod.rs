//! Backend services integration.
//!
//! This module connects the feed to the song service.

pub mod repository;

pub use repository::SongRepository;
