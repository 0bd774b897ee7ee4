//! Back-to-back clip playback under a single cancellable handle.
//!
//! A sequence moves through `Idle -> Resolving -> PlayingClip(i) -> ... ->
//! Completed`, with `Cancelled` reachable from `Resolving` or any
//! `PlayingClip`. Exactly one clip is audible at a time; the sequencer
//! holds no parallelism. Cancellation, completion and failure are three
//! distinct outcomes: a cancelled sequence is silence, not an error.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use derive_builder::Builder;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use super::resolver::{SignedUrlResolver, UrlSigner};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("failed to fetch clip {location}: {reason}")]
    Fetch { location: String, reason: String },
    #[error("failed to decode clip {location}: {reason}")]
    Decode { location: String, reason: String },
    #[error("audio output unavailable: {0}")]
    Output(String),
    #[error("playback task failed: {0}")]
    Task(String),
}

/// Final outcome of one sequence.
#[derive(Debug, PartialEq, Eq)]
pub enum SequenceOutcome {
    Completed,
    Cancelled,
    Failed(PlaybackError),
}

/// Live state of one sequence, observable through the playback handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    Idle,
    Resolving,
    PlayingClip(usize),
    Completed,
    Cancelled,
    Failed,
}

/// Options for starting a sequence.
#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct SequenceParams {
    /// Initial playback volume, 0.0-1.0.
    pub volume: f32,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

/// The playback primitive behind the sequencer: load one audio resource,
/// play it to natural completion, report completion or error.
///
/// Implementations must stop output when the returned future is dropped;
/// the sequencer relies on that for immediate cancellation mid-clip.
pub trait ClipPlayer: Send + Sync + 'static {
    fn play_clip(
        &self,
        location: &str,
        volume: watch::Receiver<f32>,
    ) -> impl Future<Output = Result<(), PlaybackError>> + Send;
}

/// Handle to one in-flight sequence. Never reused: a new sequence gets a
/// new handle, and callers cancel the old one first (last writer wins at
/// the call site).
pub struct AudioSequencePlayback {
    cancel_tx: watch::Sender<bool>,
    volume_tx: watch::Sender<f32>,
    state_rx: watch::Receiver<SequenceState>,
    handle: JoinHandle<SequenceOutcome>,
}

impl AudioSequencePlayback {
    /// Stop the current clip immediately and prevent any later clip from
    /// starting. Idempotent.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Apply `volume` to the currently playing clip and all clips started
    /// afterwards. Never restarts a clip.
    pub fn set_volume(&self, volume: f32) {
        let _ = self.volume_tx.send(volume);
    }

    /// Current position in the sequence state machine.
    pub fn state(&self) -> SequenceState {
        *self.state_rx.borrow()
    }

    /// Wait for the sequence to finish and return its outcome.
    pub async fn finished(self) -> SequenceOutcome {
        self.handle
            .await
            .unwrap_or_else(|err| SequenceOutcome::Failed(PlaybackError::Task(err.to_string())))
    }
}

/// Resolve `paths` through the shared resolver, then play them in order.
pub fn play_clip_sequence<P, S>(
    player: Arc<P>,
    resolver: Arc<Mutex<SignedUrlResolver<S>>>,
    paths: Vec<String>,
    params: SequenceParams,
) -> AudioSequencePlayback
where
    P: ClipPlayer,
    S: UrlSigner + 'static,
{
    let (cancel_tx, mut cancel_rx) = watch::channel(false);
    let (volume_tx, volume_rx) = watch::channel(params.volume);
    let (state_tx, state_rx) = watch::channel(SequenceState::Idle);

    let handle = tokio::spawn(async move {
        state_tx.send_replace(SequenceState::Resolving);
        let locations = tokio::select! {
            _ = cancel_rx.changed() => {
                state_tx.send_replace(SequenceState::Cancelled);
                return SequenceOutcome::Cancelled;
            }
            locations = async { resolver.lock().await.resolve(&paths).await } => locations,
        };
        run_clips(&*player, &locations, cancel_rx, volume_rx, state_tx).await
    });

    AudioSequencePlayback {
        cancel_tx,
        volume_tx,
        state_rx,
        handle,
    }
}

/// Play already-resolved locations in order, skipping the resolving stage.
pub fn play_locations<P: ClipPlayer>(
    player: Arc<P>,
    locations: Vec<String>,
    params: SequenceParams,
) -> AudioSequencePlayback {
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let (volume_tx, volume_rx) = watch::channel(params.volume);
    let (state_tx, state_rx) = watch::channel(SequenceState::Idle);

    let handle = tokio::spawn(async move {
        run_clips(&*player, &locations, cancel_rx, volume_rx, state_tx).await
    });

    AudioSequencePlayback {
        cancel_tx,
        volume_tx,
        state_rx,
        handle,
    }
}

async fn run_clips<P: ClipPlayer>(
    player: &P,
    locations: &[String],
    mut cancel_rx: watch::Receiver<bool>,
    volume_rx: watch::Receiver<f32>,
    state_tx: watch::Sender<SequenceState>,
) -> SequenceOutcome {
    for (index, location) in locations.iter().enumerate() {
        if *cancel_rx.borrow() {
            state_tx.send_replace(SequenceState::Cancelled);
            return SequenceOutcome::Cancelled;
        }
        state_tx.send_replace(SequenceState::PlayingClip(index));

        tokio::select! {
            _ = cancel_rx.changed() => {
                // Dropping the play future stops the current clip.
                state_tx.send_replace(SequenceState::Cancelled);
                return SequenceOutcome::Cancelled;
            }
            result = player.play_clip(location, volume_rx.clone()) => {
                if let Err(err) = result {
                    log::warn!("clip {index} ({location}) failed: {err}");
                    state_tx.send_replace(SequenceState::Failed);
                    return SequenceOutcome::Failed(err);
                }
            }
        }
    }
    state_tx.send_replace(SequenceState::Completed);
    SequenceOutcome::Completed
}

/// [`ClipPlayer`] over rodio and the default output device.
///
/// Locations may be absolute URLs (resolved clips) or namespace-relative
/// paths, which are joined to `base_url` as the unresolved fallback.
pub struct RodioClipPlayer {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl RodioClipPlayer {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Base URL prepended to namespace-relative locations.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    fn location_url(&self, location: &str) -> String {
        if location.contains("://") {
            return location.to_string();
        }
        match &self.base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), location),
            None => location.to_string(),
        }
    }
}

impl Default for RodioClipPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipPlayer for RodioClipPlayer {
    async fn play_clip(
        &self,
        location: &str,
        mut volume: watch::Receiver<f32>,
    ) -> Result<(), PlaybackError> {
        let url = self.location_url(location);
        let fetch_err = |reason: String| PlaybackError::Fetch {
            location: location.to_string(),
            reason,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;
        if !response.status().is_success() {
            return Err(fetch_err(format!("status {}", response.status())));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        let stream = rodio::OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Output(e.to_string()))?;
        let sink = rodio::Sink::connect_new(stream.mixer());
        let decoder = rodio::Decoder::new(std::io::Cursor::new(bytes.to_vec())).map_err(|e| {
            PlaybackError::Decode {
                location: location.to_string(),
                reason: e.to_string(),
            }
        })?;
        sink.set_volume(*volume.borrow());
        sink.append(decoder);

        // Poll until the clip drains naturally; volume changes apply to
        // the live sink without restarting it.
        while !sink.empty() {
            if volume.has_changed().unwrap_or(false) {
                sink.set_volume(*volume.borrow_and_update());
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        Ok(())
    }
}
