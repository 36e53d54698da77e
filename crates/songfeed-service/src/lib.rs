//! # songfeed-service
//!
//! Client for the remote song service that backs the SongFeed feed.
//!
//! The service answers a single request, `GET /songs`, with a JSON
//! [`SongsResponse`](songfeed_core::SongsResponse). [`SongService`] is the
//! seam the rest of the application depends on; [`SongServiceClient`] is the
//! HTTP implementation.

pub mod client;
pub mod config;
pub mod service;

pub use client::SongServiceClient;
pub use config::ServiceConfig;
pub use service::SongService;
