//! Player state for the song on screen.

use songfeed_core::Song;

/// Playback state.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
}

/// What the feed's player is doing.
#[derive(Clone, Debug, Default)]
pub struct PlayerState {
    /// Song loaded into the player.
    pub current: Option<Song>,
    /// Playback status.
    pub status: PlaybackStatus,
    /// Current position in seconds.
    pub position: f64,
    /// Whether output is muted.
    pub muted: bool,
}

impl PlayerState {
    /// Create a new, empty player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a song from the start and play it.
    pub fn load(&mut self, song: Song) {
        self.current = Some(song);
        self.position = 0.0;
        self.status = PlaybackStatus::Playing;
    }

    /// Move the playhead.
    pub fn seek_to(&mut self, position: f64) {
        self.position = position.max(0.0);
    }

    /// Flip mute and return the new setting.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Unload the song and stop.
    pub fn release(&mut self) {
        self.current = None;
        self.position = 0.0;
        self.status = PlaybackStatus::Stopped;
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}
