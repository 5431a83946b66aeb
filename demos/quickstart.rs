use chrono::NaiveTime;
use prayer_clock::{resolve_intervals, FrameProducer, PrayerSchedule};

fn main() {
    env_logger::init();

    let schedule =
        PrayerSchedule::parse(["05:50", "07:10", "13:15", "16:30", "19:20", "20:35"]).unwrap();

    for interval in resolve_intervals(&schedule) {
        println!("{interval}");
    }

    let producer = FrameProducer::default();
    for (h, m) in [(5, 0), (6, 30), (10, 0), (19, 20), (21, 0)] {
        let now = NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let frame = producer.produce_frame(Some(&schedule), now);
        let overlay = frame.prayers().unwrap();
        println!(
            "{} | active: {:<7} | {} {}",
            frame.digital_time,
            overlay.active.map_or("-".to_string(), |p| p.to_string()),
            overlay.marker.glyph(),
            overlay.countdown_text
        );
    }
}
