//! Fetches today's schedule and prints one frame per second.
//!
//! The schedule is refetched when the local date changes; until the new day's
//! schedule arrives the previous one keeps rendering.
//!
//! ```text
//! cargo run --example live --features http -- prayer-clock.toml
//! ```

use chrono::Local;
use prayer_clock::{
    refresh, ClockConfig, FrameProducer, Overlay, ScheduleRequest, ScheduleStore,
    WaktuSolatProvider,
};
use std::time::Duration;

const REFRESH_EVERY: u32 = 60;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ClockConfig::from_file(path)?,
        None => ClockConfig::from_toml_str("[provider]\nzone = \"WLY01\"\n")?,
    };

    let provider = WaktuSolatProvider::new(
        config.provider.base_url.clone(),
        Duration::from_secs(config.provider.timeout_secs),
    )?;
    let location = config.location()?;
    let policy = config.retry_policy();
    let store = ScheduleStore::new();
    let producer = FrameProducer::new(config.dial_config()?);

    let mut request = ScheduleRequest::today(location.clone());
    let mut stale = true;
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let mut tick: u32 = 0;
    loop {
        ticker.tick().await;
        let now = Local::now();

        if !request.is_for(now.date_naive()) {
            log::info!("date changed to {}, refetching", now.date_naive());
            request = ScheduleRequest::for_date(location.clone(), now.date_naive());
            stale = true;
            tick = 0;
        }
        if stale && tick % REFRESH_EVERY == 0 {
            // failures are logged by refresh; frames keep rendering what the store holds
            stale = refresh(&store, &provider, &request, &policy).await.is_err();
        }

        let frame = producer.produce_from_store(&store, now.time());
        match &frame.overlay {
            Overlay::Ready(overlay) => println!(
                "{} | {} | {}",
                frame.digital_time,
                overlay.marker.glyph(),
                overlay.countdown_text
            ),
            Overlay::Unavailable => println!("{} | waiting for schedule", frame.digital_time),
        }
        tick = tick.wrapping_add(1);
    }
}
