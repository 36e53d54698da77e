//! # songfeed-app
//!
//! Feed loading and presentation for SongFeed.
//!
//! - [`services::SongRepository`] passes the song service through.
//! - [`viewmodel::FeedViewModel`] turns one fetch into a `Loading` →
//!   `Success`/`Error` sequence, fetching on a background runtime and
//!   publishing on the thread that owns it.
//! - [`screen::FeedScreen`] observes that sequence and handles user actions.

pub mod config;
pub mod screen;
pub mod services;
pub mod state;
pub mod viewmodel;

pub use config::AppConfig;
pub use screen::{FeedAction, FeedScreen, ScreenMessage};
pub use services::SongRepository;
pub use viewmodel::FeedViewModel;
