//! The song service seam.

use std::future::Future;

use songfeed_core::{Result, SongsResponse};

/// Something that can produce the song feed.
///
/// Each call performs one request and resolves to exactly one response or
/// one failure.
pub trait SongService: Send + Sync + 'static {
    /// Fetch the current song collection.
    fn get_songs(&self) -> impl Future<Output = Result<SongsResponse>> + Send;
}
