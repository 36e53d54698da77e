//! Feed view-model: one fetch, observed as a `Resource`.
//!
//! Loads run on a background Tokio runtime. Their outcomes come back over a
//! channel and are only applied when the owning (UI) thread calls
//! [`FeedViewModel::pump`] or [`FeedViewModel::pump_timeout`], so observers
//! are always notified on the thread that owns the view-model.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use songfeed_core::{Resource, Result, Song, SongsResponse};
use songfeed_service::SongService;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::services::SongRepository;
use crate::state::{LiveState, Observer};

/// State published to the feed screen.
pub type SongsResource = Resource<Vec<Song>>;

/// Result of one background load, tagged with the load that produced it.
struct LoadOutcome {
    generation: u64,
    result: Result<SongsResponse>,
}

/// Drives the feed through `Loading` → `Success` | `Error`.
///
/// Only the most recent [`get_songs`](Self::get_songs) call can reach
/// observers with a terminal state: starting a load aborts the previous one
/// and discards anything it already produced.
pub struct FeedViewModel<S: SongService> {
    repository: Arc<SongRepository<S>>,
    /// Background runtime the service call runs on.
    runtime: Handle,
    songs_response: LiveState<SongsResource>,
    outcome_tx: Sender<LoadOutcome>,
    outcome_rx: Receiver<LoadOutcome>,
    /// Identifies the latest load; older outcomes are stale.
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl<S: SongService> FeedViewModel<S> {
    /// Create a view-model that fetches on `runtime`.
    pub fn new(repository: SongRepository<S>, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            repository: Arc::new(repository),
            runtime,
            songs_response: LiveState::new(),
            outcome_tx,
            outcome_rx,
            generation: 0,
            in_flight: None,
        }
    }

    /// Start a fresh load.
    ///
    /// `Loading` is published before this returns; the terminal state is
    /// published by a later pump. Never blocks.
    pub fn get_songs(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!("Superseding in-flight load {}", self.generation);
            }
            task.abort();
        }

        self.generation += 1;
        let generation = self.generation;
        self.songs_response.set(Resource::loading());
        debug!("Load {generation} started");

        let repository = Arc::clone(&self.repository);
        let outcome_tx = self.outcome_tx.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = repository.get_songs().await;
            // The view-model may be gone; nobody is left to tell.
            let _ = outcome_tx.send(LoadOutcome { generation, result });
        }));
    }

    /// Apply every finished load without waiting.
    ///
    /// Returns how many states were published.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            if self.apply(outcome) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait up to `timeout` for the current load to finish, then apply it.
    ///
    /// Must not be called from inside an async task: it blocks the calling
    /// thread. Returns whether a state was published.
    pub fn pump_timeout(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.outcome_rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    if self.apply(outcome) {
                        self.pump();
                        return true;
                    }
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return false,
            }
        }
    }

    /// Whether the latest load has not reached a terminal state yet.
    pub fn is_loading(&self) -> bool {
        self.songs_response.get().is_some_and(Resource::is_loading)
    }

    /// Latest published state, if any load has started.
    pub const fn songs_response(&self) -> Option<&SongsResource> {
        self.songs_response.get()
    }

    /// Subscribe to published states.
    pub fn observe(&mut self) -> Observer<SongsResource> {
        self.songs_response.observe()
    }

    fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "Dropping stale result of load {} (current {})",
                outcome.generation, self.generation
            );
            return false;
        }

        self.in_flight = None;
        match &outcome.result {
            Ok(response) => info!("Load {} fetched {} songs", outcome.generation, response.len()),
            Err(e) => warn!("Load {} failed: {e}", outcome.generation),
        }
        let resource = Resource::from_result(outcome.result.map(SongsResponse::into_songs));
        self.songs_response.set(resource);
        true
    }

    #[cfg(test)]
    fn has_pending_outcome(&self) -> bool {
        !self.outcome_rx.is_empty()
    }
}

impl<S: SongService> Drop for FeedViewModel<S> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
