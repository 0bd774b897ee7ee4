use std::sync::Arc;

use chrono::{Local, Timelike};
use tokio::sync::Mutex;

use yomiage_rs::reading::furigana::date_time_furigana;
use yomiage_rs::{
    compose_date_time, date_clip_paths, play_clip_sequence, time_clip_paths, HourFormat,
    HttpUrlSigner, RodioClipPlayer, SequenceOutcome, SequenceParams, SignedUrlResolver,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let now = Local::now();
    let date = now.date_naive();
    let (hour, minute) = (now.hour(), now.minute());

    let parts = compose_date_time(date, hour, minute, HourFormat::Twelve)?;
    let reading = parts.reading();
    println!("script:   {}", reading.full_script);
    println!("kana:     {}", reading.full_kana);
    println!("furigana: {}", date_time_furigana(&parts));

    let mut paths = date_clip_paths(
        parts.year.value,
        parts.month.value,
        parts.day.value,
        true,
    )?;
    paths.extend(time_clip_paths(hour, minute, HourFormat::Twelve)?);

    let sign_endpoint = std::env::var("YOMIAGE_SIGN_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:3000/api/audio/sign".to_string());
    let asset_base = std::env::var("YOMIAGE_ASSET_BASE")
        .unwrap_or_else(|_| "http://localhost:3000/tool-audio".to_string());

    let resolver = Arc::new(Mutex::new(SignedUrlResolver::new(HttpUrlSigner::new(
        sign_endpoint,
    ))));
    let player = Arc::new(RodioClipPlayer::with_base_url(asset_base));

    let playback = play_clip_sequence(player, resolver, paths, SequenceParams::default());
    match playback.finished().await {
        SequenceOutcome::Completed => println!("playback finished"),
        SequenceOutcome::Cancelled => println!("playback cancelled"),
        SequenceOutcome::Failed(err) => eprintln!("playback failed: {err}"),
    }

    Ok(())
}
