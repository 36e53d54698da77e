//! Response envelope returned by the song service.

use serde::{Deserialize, Serialize};

use super::Song;

/// Ordered collection of songs produced by one service call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongsResponse {
    /// Songs in feed order.
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl SongsResponse {
    pub const fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Consume the response, keeping only the songs.
    pub fn into_songs(self) -> Vec<Song> {
        self.songs
    }
}

impl From<Vec<Song>> for SongsResponse {
    fn from(songs: Vec<Song>) -> Self {
        Self::new(songs)
    }
}
