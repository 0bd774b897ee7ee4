//! Deterministic clip path construction.
//!
//! Every pre-rendered audio asset lives under one of three domains:
//!
//! ```text
//! date/year/2026.mp3        date/month/08.mp3       date/day/28.mp3
//! time/12h/part1/gozen-09.mp3   time/12h/part2/30.mp3
//! time/24h/part1/14.mp3         time/24h/part2/05.mp3
//! phrase/hon/pencil/06.mp3
//! ```
//!
//! Paths double as resolver cache keys and as fallback playback
//! locations, so the builders validate their inputs instead of ever
//! emitting a path no asset was rendered for.

use crate::reading::counters::CounterId;
use crate::reading::datetime::{display_hour, HourFormat};
use crate::reading::{check_range, ReadingError};

/// Domains of the clip-asset namespace.
pub const CLIP_DOMAINS: [&str; 3] = ["date/", "time/", "phrase/"];

/// Earliest year with pre-rendered audio.
pub const YEAR_MIN: u32 = 1900;
/// Latest year with pre-rendered audio.
pub const YEAR_MAX: u32 = 2100;

/// Whether `path` belongs to the clip-asset namespace the resolver signs.
pub fn in_clip_namespace(path: &str) -> bool {
    CLIP_DOMAINS.iter().any(|domain| path.starts_with(domain))
}

/// Clip paths for a calendar date, in spoken order.
///
/// `include_year` controls whether the year clip leads the list, so
/// year-less date phrases can be assembled from the same builder.
pub fn date_clip_paths(
    year: u32,
    month: u32,
    day: u32,
    include_year: bool,
) -> Result<Vec<String>, ReadingError> {
    check_range("year", year, YEAR_MIN, YEAR_MAX)?;
    check_range("month", month, 1, 12)?;
    check_range("day", day, 1, 31)?;

    let mut paths = Vec::with_capacity(3);
    if include_year {
        paths.push(format!("date/year/{year:04}.mp3"));
    }
    paths.push(format!("date/month/{month:02}.mp3"));
    paths.push(format!("date/day/{day:02}.mp3"));
    Ok(paths)
}

/// Clip paths for a wall-clock time, in spoken order.
///
/// The 12-hour variant folds the period into the hour clip key
/// (`gozen-09`, `gogo-12`); the 24-hour variant keys the raw hour.
pub fn time_clip_paths(
    hour: u32,
    minute: u32,
    format: HourFormat,
) -> Result<Vec<String>, ReadingError> {
    check_range("hour", hour, 0, 23)?;
    check_range("minute", minute, 0, 59)?;

    let segment = format.path_segment();
    let part1 = match format {
        HourFormat::TwentyFour => format!("time/{segment}/part1/{hour:02}.mp3"),
        HourFormat::Twelve => {
            let period = if hour < 12 { "gozen" } else { "gogo" };
            format!("time/{segment}/part1/{period}-{:02}.mp3", display_hour(hour))
        }
    };
    Ok(vec![part1, format!("time/{segment}/part2/{minute:02}.mp3")])
}

/// Clip path for one counted-object phrase.
pub fn counter_clip_path(
    counter: CounterId,
    object_id: &str,
    quantity: u32,
) -> Result<String, ReadingError> {
    check_range("quantity", quantity, 1, 10)?;
    Ok(format!("phrase/{counter}/{object_id}/{quantity:02}.mp3"))
}
