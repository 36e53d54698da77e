//! User actions on the feed and the messages they produce.

/// Shown when a download is requested.
pub const MESSAGE_SONG_IS_DOWNLOADING: &str = "Song is downloading";
/// Shown for the favorite button when the song is marked favorite.
pub const MESSAGE_SONG_ADDED_TO_FAVORITES: &str = "Song added to favorites";
/// Shown for the favorite button when the song is not marked favorite.
pub const MESSAGE_SONG_REMOVED_FROM_FAVORITES: &str = "Song removed from favorites";

/// Buttons on a feed page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedAction {
    Share,
    Download,
    Volume,
    Favorite,
    /// Tap on the progress bar: skip to the next song.
    Next,
    /// Swipe back one page.
    Previous,
}

impl FeedAction {
    /// Map a terminal key to an action.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            's' => Some(Self::Share),
            'd' => Some(Self::Download),
            'v' => Some(Self::Volume),
            'f' => Some(Self::Favorite),
            'n' => Some(Self::Next),
            'p' => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Something the screen wants to show the user.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScreenMessage {
    /// Text to hand to a share target.
    Share(String),
    /// Short transient notice.
    Toast(String),
}

impl std::fmt::Display for ScreenMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Share(text) => write!(f, "Share: {text}"),
            Self::Toast(text) => f.write_str(text),
        }
    }
}
