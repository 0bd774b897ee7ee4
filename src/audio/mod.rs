//! Clip path construction, signed-URL resolution and sequenced playback.
//!
//! A structured reading maps to an ordered list of relative clip paths
//! ([`paths`]); the resolver swaps those for time-boxed signed URLs where
//! it can ([`resolver`]); the sequencer plays the resulting locations
//! back-to-back under one cancellable handle ([`sequencer`]). The two
//! networked modules sit behind the `playback` feature; path building is
//! pure and always available.

pub mod paths;
#[cfg(feature = "playback")]
pub mod resolver;
#[cfg(feature = "playback")]
pub mod sequencer;

pub use paths::{
    counter_clip_path, date_clip_paths, in_clip_namespace, time_clip_paths, CLIP_DOMAINS,
};
#[cfg(feature = "playback")]
pub use resolver::{HttpUrlSigner, SignError, SignedLocation, SignedUrlResolver, UrlSigner};
#[cfg(feature = "playback")]
pub use sequencer::{
    play_clip_sequence, play_locations, AudioSequencePlayback, ClipPlayer, PlaybackError,
    RodioClipPlayer, SequenceOutcome, SequenceParams, SequenceParamsBuilder, SequenceState,
};
