#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use songfeed_core::{Creator, Error, Result, Song, SongsResponse};
use songfeed_service::SongService;
use tokio::sync::Notify;

/// One scripted answer from [`ScriptedService`].
pub struct Step {
    result: std::result::Result<Vec<Song>, String>,
    gate: Option<Arc<Notify>>,
}

impl Step {
    pub fn songs(songs: Vec<Song>) -> Self {
        Self {
            result: Ok(songs),
            gate: None,
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            gate: None,
        }
    }

    /// Hold the answer until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

/// Song service that replays scripted answers in call order.
pub struct ScriptedService {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    entered: Sender<usize>,
}

impl ScriptedService {
    /// Returns the service and a receiver reporting each call's index as it starts.
    pub fn new(steps: Vec<Step>) -> (Self, Receiver<usize>) {
        let (entered, entered_rx) = unbounded();
        let service = Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            entered,
        };
        (service, entered_rx)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SongService for ScriptedService {
    async fn get_songs(&self) -> Result<SongsResponse> {
        let (index, step) = {
            let mut steps = self.steps.lock().unwrap();
            (self.calls.fetch_add(1, Ordering::SeqCst), steps.pop_front())
        };
        let _ = self.entered.send(index);

        let step = step.ok_or_else(|| Error::Network("no scripted answer left".to_string()))?;
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.result.map(SongsResponse::new).map_err(Error::Network)
    }
}

pub fn song(id: &str, title: &str) -> Song {
    Song::new(
        id,
        title,
        Creator::new(format!("{id}@example.com")),
        format!("https://cdn.example.com/{id}.mp3"),
    )
}

pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

pub const WAIT: Duration = Duration::from_secs(5);
