//! # yomiage-rs
//!
//! A Japanese reading engine for dates, clock times and counted
//! quantities, paired with sequenced playback of pre-rendered audio
//! clips.
//!
//! ## Features
//!
//! - **Readings**: years, months, days, weekdays, hours, minutes and
//!   counter-classifier phrases as script + kana, with the irregular
//!   lexical readings and euphonic sound changes encoded in authored
//!   tables rather than derived from digit names
//! - **Drills**: practice-card generation over a closed set of numeral
//!   classifiers, with recency-aware selection
//! - **Playback** (feature `playback`, default-on): signed-URL
//!   resolution with proactive refresh and failure cooldown, plus a
//!   cancellable back-to-back clip sequencer over rodio
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! yomiage-rs = "0.3"
//! ```
//!
//! ```ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use tokio::sync::Mutex;
//! use yomiage_rs::{
//!     compose_date_time, date_clip_paths, play_clip_sequence, HourFormat,
//!     HttpUrlSigner, RodioClipPlayer, SequenceParams, SignedUrlResolver,
//! };
//!
//! let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
//! let parts = compose_date_time(date, 9, 30, HourFormat::Twelve)?;
//! println!("{}", parts.reading().full_kana);
//!
//! let resolver = Arc::new(Mutex::new(SignedUrlResolver::new(
//!     HttpUrlSigner::new("https://api.example.com/audio/sign"),
//! )));
//! let player = Arc::new(RodioClipPlayer::new());
//! let paths = date_clip_paths(2026, 8, 28, true)?;
//! let playback = play_clip_sequence(player, resolver, paths, SequenceParams::default());
//! playback.finished().await;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod reading;

pub use audio::{counter_clip_path, date_clip_paths, in_clip_namespace, time_clip_paths};
#[cfg(feature = "playback")]
pub use audio::{
    play_clip_sequence, play_locations, AudioSequencePlayback, ClipPlayer, HttpUrlSigner,
    PlaybackError, RodioClipPlayer, SequenceOutcome, SequenceParams, SequenceState,
    SignedUrlResolver, UrlSigner,
};
pub use reading::{
    compose_date_time, counter_phrase, draw_card, number_kana, phrase_catalog, quantity_reading,
    CounterId, CounterObject, CounterPhraseCatalogEntry, CounterPracticeCard, CounterSelection,
    DateTimeReading, DateTimeReadingParts, Exposure, HourFormat, NumeralReading, ReadingError,
    ReadingPair,
};
