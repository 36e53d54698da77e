//! Feed screen: observes the view-model and handles page actions.

use std::fmt::Write as _;
use std::time::Duration;

use songfeed_core::{Resource, Song};
use songfeed_service::SongService;
use tracing::{debug, error};

use super::actions::{
    FeedAction, ScreenMessage, MESSAGE_SONG_ADDED_TO_FAVORITES, MESSAGE_SONG_IS_DOWNLOADING,
    MESSAGE_SONG_REMOVED_FROM_FAVORITES,
};
use crate::state::{Observer, PlayerState};
use crate::viewmodel::{FeedViewModel, SongsResource};

/// Text handed to a share target for `song`.
pub fn share_text(song: &Song, app_name: &str) -> String {
    format!(
        "Hey, I am listening to {} by {} on {}",
        song.title, song.creator.email, app_name
    )
}

/// One page per song, swiped through in order.
pub struct FeedScreen<S: SongService> {
    view_model: FeedViewModel<S>,
    observer: Observer<SongsResource>,
    /// Songs currently shown by the pager.
    songs: Vec<Song>,
    /// Index of the visible page.
    current: usize,
    progress_visible: bool,
    player: PlayerState,
    app_name: String,
}

impl<S: SongService> FeedScreen<S> {
    pub fn new(mut view_model: FeedViewModel<S>, app_name: impl Into<String>) -> Self {
        let observer = view_model.observe();
        Self {
            view_model,
            observer,
            songs: Vec::new(),
            current: 0,
            progress_visible: false,
            player: PlayerState::new(),
            app_name: app_name.into(),
        }
    }

    /// Fetch the feed.
    pub fn start(&mut self) {
        self.view_model.get_songs();
        self.sync();
    }

    /// Apply everything the view-model has published since the last sync.
    ///
    /// Returns the number of states applied.
    pub fn sync(&mut self) -> usize {
        self.view_model.pump();
        self.apply_pending()
    }

    /// Like [`sync`](Self::sync), but first waits up to `timeout` for the
    /// running load to finish.
    pub fn sync_timeout(&mut self, timeout: Duration) -> usize {
        self.view_model.pump_timeout(timeout);
        self.apply_pending()
    }

    fn apply_pending(&mut self) -> usize {
        let states = self.observer.drain();
        let count = states.len();
        for state in states {
            self.apply(state);
        }
        count
    }

    fn apply(&mut self, state: SongsResource) {
        match state {
            Resource::Loading => {
                self.progress_visible = true;
            }
            Resource::Success(songs) => {
                // An empty feed leaves whatever is on screen.
                if songs.is_empty() {
                    return;
                }
                self.progress_visible = false;
                debug!("Fetched songs ({})", songs.len());
                self.songs = songs;
                self.restore_page();
            }
            Resource::Error { message } => {
                error!("Failed to load songs: {message}");
            }
        }
    }

    /// Pick the page to show after a refresh.
    ///
    /// A playing page survives the refresh if it still exists; the player is
    /// only reloaded when a different song now sits at that index.
    fn restore_page(&mut self) {
        if !self.player.is_playing() {
            self.select_page(0);
            return;
        }
        match self.songs.get(self.current) {
            Some(song) if self.player.current.as_ref().is_some_and(|c| c.id == song.id) => {
                debug!("Keeping page {} after refresh", self.current);
            }
            Some(_) => self.select_page(self.current),
            None => self.select_page(0),
        }
    }

    /// Swipe to `index`, loading its song into the player.
    pub fn select_page(&mut self, index: usize) {
        let Some(song) = self.songs.get(index) else {
            return;
        };
        self.current = index;
        debug!("Page {index} selected: {}", song.title);
        self.player.load(song.clone());
    }

    /// Handle a button press on the current page.
    pub fn handle(&mut self, action: FeedAction) -> Option<ScreenMessage> {
        let song = self.current_song()?.clone();
        match action {
            FeedAction::Share => Some(ScreenMessage::Share(share_text(&song, &self.app_name))),
            FeedAction::Download => Some(ScreenMessage::Toast(
                MESSAGE_SONG_IS_DOWNLOADING.to_string(),
            )),
            FeedAction::Volume => {
                let muted = self.player.toggle_mute();
                debug!("Muted: {muted}");
                None
            }
            FeedAction::Favorite => {
                let message = if song.is_favorite {
                    MESSAGE_SONG_ADDED_TO_FAVORITES
                } else {
                    MESSAGE_SONG_REMOVED_FROM_FAVORITES
                };
                Some(ScreenMessage::Toast(message.to_string()))
            }
            FeedAction::Next => {
                self.move_to_next();
                None
            }
            FeedAction::Previous => {
                if self.current > 0 {
                    self.select_page(self.current - 1);
                }
                None
            }
        }
    }

    fn move_to_next(&mut self) {
        debug!("Move to next song, current page {}", self.current);
        if self.current + 1 >= self.songs.len() {
            return;
        }
        self.select_page(self.current + 1);
        self.player.seek_to(0.0);
    }

    /// Start over with a fresh load.
    pub fn reload(&mut self) {
        self.start();
    }

    /// Release playback resources when the screen goes away.
    pub fn stop(&mut self) {
        self.player.release();
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.songs.get(self.current)
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub const fn is_progress_visible(&self) -> bool {
        self.progress_visible
    }

    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    pub const fn view_model(&self) -> &FeedViewModel<S> {
        &self.view_model
    }

    /// Plain-text rendering of the visible page.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", self.app_name);
        if !self.songs.is_empty() {
            let _ = write!(out, "  [{}/{}]", self.current + 1, self.songs.len());
        }
        out.push('\n');

        if self.progress_visible {
            out.push_str("  Loading...\n");
        }

        if let Some(song) = self.current_song() {
            let marker = if self.player.is_playing() { ">" } else { "-" };
            let _ = writeln!(out, "{marker} {}", song.title);
            let _ = writeln!(out, "  by {}", song.creator_display());
            if song.is_favorite {
                out.push_str("  * favorite\n");
            }
            if self.player.muted {
                out.push_str("  (muted)\n");
            }
        } else if !self.progress_visible {
            out.push_str("  No songs\n");
        }

        out
    }
}
