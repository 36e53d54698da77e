//! Application state management.

pub mod live;
pub mod player;

pub use live::{LiveState, Observer};
pub use player::{PlaybackStatus, PlayerState};
