//! Song repository: the feed's only path to the song service.

use songfeed_core::{Result, SongsResponse};
use songfeed_service::SongService;
use tracing::trace;

/// Pass-through adapter over a [`SongService`].
///
/// Every call reaches the service exactly once; results and failures are
/// returned untouched.
pub struct SongRepository<S> {
    service: S,
}

impl<S: SongService> SongRepository<S> {
    /// Create a repository over a song service.
    pub const fn new(service: S) -> Self {
        Self { service }
    }

    /// Fetch the song feed.
    pub async fn get_songs(&self) -> Result<SongsResponse> {
        trace!("Repository forwarding get_songs to service");
        self.service.get_songs().await
    }

    /// Access the underlying service.
    pub const fn service(&self) -> &S {
        &self.service
    }
}
