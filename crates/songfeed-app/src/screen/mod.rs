//! The feed screen.

pub mod actions;
pub mod feed;

pub use actions::{FeedAction, ScreenMessage};
pub use feed::FeedScreen;
