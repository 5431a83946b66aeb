// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer Clock
//!
//! A circular time-interval engine for a clock face annotated with the five
//! daily prayer windows.
//!
//! # Core types
//!
//! - [`TimeOfDay`]: minutes since local midnight, always in `[0, 1440)`.
//! - [`Prayer`]: the six daily markers (Sunrise only bounds Fajr).
//! - [`PrayerSchedule`]: one validated day of marker times.
//! - [`PrayerInterval`]: a window `[start, end)` that may cross midnight.
//! - [`Countdown`]: next prayer and minutes until it starts.
//! - [`RenderDescription`]: everything a renderer needs for one frame.
//! - [`ScheduleStore`]: the atomically replaceable current schedule.
//!
//! # Pipeline
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | fetch + install | [`refresh`] with a [`ScheduleProvider`] |
//! | windows | [`resolve_intervals`], [`active_interval`] |
//! | countdown | [`next_prayer`] |
//! | angles | [`to_angle`], [`hand_angles`], [`arc_angles`] |
//! | frame | [`FrameProducer::produce_frame`] |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveTime;
//! use prayer_clock::{active_interval, next_prayer, FrameProducer, Prayer, PrayerSchedule};
//!
//! let schedule =
//!     PrayerSchedule::parse(["05:50", "07:10", "13:15", "16:30", "19:20", "20:35"]).unwrap();
//!
//! let late = "23:50".parse().unwrap();
//! assert_eq!(active_interval(&schedule, late), Some(Prayer::Isha));
//!
//! let countdown = next_prayer(&schedule, "21:00".parse().unwrap());
//! assert_eq!(countdown.to_string(), "Next: Fajr in 8h 50m");
//!
//! let frame = FrameProducer::default()
//!     .produce_frame(Some(&schedule), NaiveTime::from_hms_opt(21, 0, 0).unwrap());
//! assert_eq!(frame.prayers().unwrap().active, Some(Prayer::Isha));
//! ```

mod angle;
mod config;
mod countdown;
mod error;
mod frame;
#[cfg(feature = "http")]
mod http;
mod interval;
mod prayer;
mod provider;
mod schedule;
mod store;
mod time_of_day;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{
    arc_angles, dial_angle, hand_angles, minutes_to_angle, to_angle, ArcAngles, DialCycle,
    HandAngles,
};
pub use config::{ClockConfig, DialSettings, ProviderSettings, MAX_CLOCK_OFFSET_MINUTES};
pub use countdown::{next_prayer, Countdown};
pub use error::{ClockError, ClockResult};
pub use frame::{
    ArcSpec, DayMarker, DialConfig, FrameProducer, Overlay, PrayerOverlay, RenderDescription,
};
#[cfg(feature = "http")]
pub use http::WaktuSolatProvider;
pub use interval::{
    active_interval, interval_of, resolve_intervals, resolve_span, verify_coverage, DaySpan,
    PrayerInterval,
};
pub use prayer::Prayer;
pub use provider::{
    refresh, Location, RetryPolicy, ScheduleProvider, ScheduleRequest, StaticProvider,
};
pub use schedule::{PrayerSchedule, RawSchedule};
pub use store::ScheduleStore;
pub use time_of_day::{TimeOfDay, MINUTES_PER_DAY};
