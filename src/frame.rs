// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Per-tick render description.
//!
//! [`FrameProducer::produce_frame`] is a pure transform from a schedule and
//! the current wall-clock time to a [`RenderDescription`]. The external
//! renderer draws it; the external scheduler decides when to ask for the
//! next one.
//!
//! Two clocks are in play. The hands may be shifted by a configured
//! [`DialConfig::clock_offset`]; everything derived from the schedule (active
//! window, sun/moon marker, countdown) always uses the unshifted time.

use chrono::NaiveTime;
use qtty::Radians;
use serde::Serialize;

use crate::angle::{arc_angles, hand_angles, to_angle, ArcAngles, DialCycle, HandAngles};
use crate::countdown::{next_prayer, Countdown};
use crate::error::{ClockError, ClockResult};
use crate::interval::{active_interval, resolve_intervals, PrayerInterval};
use crate::prayer::Prayer;
use crate::schedule::PrayerSchedule;
use crate::store::ScheduleStore;
use crate::time_of_day::TimeOfDay;

/// Dial settings applied to every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialConfig {
    /// Dial the prayer arcs and the sun/moon marker are laid on.
    pub arc_cycle: DialCycle,
    /// Shift applied to the hands only.
    pub clock_offset: chrono::Duration,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            arc_cycle: DialCycle::TwentyFourHour,
            clock_offset: chrono::Duration::zero(),
        }
    }
}

/// One prayer window as an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSpec {
    pub interval: PrayerInterval,
    pub angles: ArcAngles,
    /// Ring index, outward from the base circle.
    pub layer: usize,
    pub color: &'static str,
    pub highlighted: bool,
}

/// Sun or moon glyph orbiting at the current real time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayMarker {
    pub angle: Radians,
    /// `Sunrise <= now < Maghrib`.
    pub is_day: bool,
}

impl DayMarker {
    pub fn glyph(&self) -> &'static str {
        if self.is_day {
            "☀️"
        } else {
            "🌙"
        }
    }
}

/// Everything derived from the schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerOverlay {
    /// `None` between Sunrise and Dhuhr.
    pub active: Option<Prayer>,
    pub arcs: Vec<ArcSpec>,
    pub marker: DayMarker,
    pub countdown: Countdown,
    /// `Next: NAME in Hh Mm`.
    pub countdown_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Overlay {
    Ready(PrayerOverlay),
    /// No schedule yet: render the bare clock.
    Unavailable,
}

/// What the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescription {
    pub hands: HandAngles,
    /// `Current Time: HH:MM`, real time.
    pub digital_time: String,
    pub overlay: Overlay,
}

impl RenderDescription {
    /// The prayer overlay, or [`ClockError::ScheduleUnavailable`].
    pub fn prayers(&self) -> ClockResult<&PrayerOverlay> {
        match &self.overlay {
            Overlay::Ready(overlay) => Ok(overlay),
            Overlay::Unavailable => Err(ClockError::ScheduleUnavailable),
        }
    }
}

/// Builds render descriptions.
#[derive(Debug, Clone, Default)]
pub struct FrameProducer {
    config: DialConfig,
}

impl FrameProducer {
    pub fn new(config: DialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Frame for real wall-clock time `now`.
    pub fn produce_frame(
        &self,
        schedule: Option<&PrayerSchedule>,
        now: NaiveTime,
    ) -> RenderDescription {
        let shown = now + self.config.clock_offset;
        let t = TimeOfDay::from_naive_time(now);

        RenderDescription {
            hands: hand_angles(shown),
            digital_time: format!("Current Time: {}", t),
            overlay: match schedule {
                Some(schedule) => Overlay::Ready(self.overlay(schedule, t)),
                None => Overlay::Unavailable,
            },
        }
    }

    /// Frame from whatever `store` currently holds.
    pub fn produce_from_store(&self, store: &ScheduleStore, now: NaiveTime) -> RenderDescription {
        let snapshot = store.snapshot();
        self.produce_frame(snapshot.as_deref(), now)
    }

    fn overlay(&self, schedule: &PrayerSchedule, t: TimeOfDay) -> PrayerOverlay {
        let cycle = self.config.arc_cycle;
        let active = active_interval(schedule, t);

        let arcs = resolve_intervals(schedule)
            .into_iter()
            .enumerate()
            .map(|(layer, interval)| ArcSpec {
                interval,
                angles: arc_angles(&interval, cycle),
                layer,
                color: interval.prayer.color().unwrap_or("#FFFFFF"),
                highlighted: active == Some(interval.prayer),
            })
            .collect();

        let is_day = t >= schedule[Prayer::Sunrise] && t < schedule[Prayer::Maghrib];
        let countdown = next_prayer(schedule, t);

        PrayerOverlay {
            active,
            arcs,
            marker: DayMarker {
                angle: to_angle(t, cycle),
                is_day,
            },
            countdown,
            countdown_text: countdown.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::sample;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_frame_without_schedule_still_has_hands() {
        let frame = FrameProducer::default().produce_frame(None, at(9, 0, 0));
        assert_eq!(frame.overlay, Overlay::Unavailable);
        assert_eq!(frame.prayers().unwrap_err(), ClockError::ScheduleUnavailable);
        assert_eq!(frame.digital_time, "Current Time: 09:00");
        // nine o'clock points left
        assert!((frame.hands.hour.value() - PI).abs() < 1e-9);
    }

    #[test]
    fn test_frame_highlights_active_window() {
        let s = sample();
        let frame = FrameProducer::default().produce_frame(Some(&s), at(23, 50, 0));
        let overlay = frame.prayers().unwrap();
        assert_eq!(overlay.active, Some(Prayer::Isha));
        let highlighted: Vec<_> = overlay
            .arcs
            .iter()
            .filter(|a| a.highlighted)
            .map(|a| a.interval.prayer)
            .collect();
        assert_eq!(highlighted, vec![Prayer::Isha]);
        assert!(!overlay.marker.is_day);
        assert_eq!(overlay.marker.glyph(), "🌙");
        assert_eq!(overlay.countdown_text, "Next: Fajr in 6h 0m");
    }

    #[test]
    fn test_arcs_are_layered_and_colored() {
        let s = sample();
        let frame = FrameProducer::default().produce_frame(Some(&s), at(12, 0, 0));
        let overlay = frame.prayers().unwrap();
        assert_eq!(overlay.arcs.len(), 5);
        for (i, arc) in overlay.arcs.iter().enumerate() {
            assert_eq!(arc.layer, i);
            assert_eq!(Some(arc.color), arc.interval.prayer.color());
        }
        assert_eq!(overlay.active, None);
        assert!(overlay.arcs.iter().all(|a| !a.highlighted));
        assert!(overlay.marker.is_day);
    }

    #[test]
    fn test_day_night_boundaries() {
        let s = sample();
        let producer = FrameProducer::default();
        let marker = |h, m| {
            producer
                .produce_frame(Some(&s), at(h, m, 0))
                .prayers()
                .unwrap()
                .marker
        };
        assert!(!marker(7, 9).is_day);
        assert!(marker(7, 10).is_day);
        assert!(marker(19, 19).is_day);
        assert!(!marker(19, 20).is_day);
    }

    #[test]
    fn test_clock_offset_moves_hands_only() {
        let s = sample();
        let plain = FrameProducer::default();
        let shifted = FrameProducer::new(DialConfig {
            clock_offset: chrono::Duration::minutes(195),
            ..DialConfig::default()
        });

        let now = at(21, 0, 0);
        let a = plain.produce_frame(Some(&s), now);
        let b = shifted.produce_frame(Some(&s), now);

        assert_ne!(a.hands, b.hands);
        assert_eq!(b.hands, plain.produce_frame(None, at(0, 15, 0)).hands);
        assert_eq!(a.overlay, b.overlay);
        assert_eq!(a.digital_time, b.digital_time);
        assert_eq!(
            b.prayers().unwrap().countdown,
            Countdown {
                target: Prayer::Fajr,
                minutes_remaining: 530
            }
        );
    }

    #[test]
    fn test_twelve_hour_arc_dial() {
        let s = sample();
        let producer = FrameProducer::new(DialConfig {
            arc_cycle: DialCycle::TwelveHour,
            ..DialConfig::default()
        });
        let frame = producer.produce_frame(Some(&s), at(18, 0, 0));
        let marker = frame.prayers().unwrap().marker;
        // 18:00 on a 12-hour dial points at six o'clock
        assert!((marker.angle.value() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_frame_from_store() {
        let store = ScheduleStore::new();
        let producer = FrameProducer::default();
        assert_eq!(
            producer.produce_from_store(&store, at(6, 0, 0)).overlay,
            Overlay::Unavailable
        );
        store.install(sample());
        let frame = producer.produce_from_store(&store, at(6, 0, 0));
        assert_eq!(frame.prayers().unwrap().active, Some(Prayer::Fajr));
    }

    #[test]
    fn test_render_description_serializes() {
        let frame = FrameProducer::default().produce_frame(Some(&sample()), at(13, 15, 0));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["overlay"]["status"], "ready");
        assert_eq!(json["overlay"]["active"], "Dhuhr");
        assert_eq!(json["overlay"]["arcs"][0]["interval"]["start"], "05:50");

        let empty = FrameProducer::default().produce_frame(None, at(13, 15, 0));
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["overlay"]["status"], "unavailable");
    }
}
