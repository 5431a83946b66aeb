// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day to dial angle mapping.
//!
//! Angles are screen-space radians: zero points to three o'clock and values
//! grow clockwise, so twelve o'clock sits at `−π/2`:
//!
//! ```text
//! angle = (t mod cycle) / cycle · 2π − π/2
//! ```
//!
//! Two dials share the formula:
//!
//! | Cycle | Used for |
//! |-------|----------|
//! | [`DialCycle::TwelveHour`] (720 min) | clock hands |
//! | [`DialCycle::TwentyFourHour`] (1440 min) | prayer arcs, sun/moon marker |

use chrono::{NaiveTime, Timelike};
use core::f64::consts::{FRAC_PI_2, TAU};
use qtty::{Degrees, Minutes, Radian, Radians};
use serde::{Deserialize, Serialize};

use crate::error::ClockError;
use crate::interval::PrayerInterval;
use crate::time_of_day::TimeOfDay;

/// Period over which a dial mapping repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum DialCycle {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl DialCycle {
    /// Length of the cycle in minutes.
    #[inline]
    pub const fn minutes(self) -> u16 {
        match self {
            DialCycle::TwelveHour => 720,
            DialCycle::TwentyFourHour => 1440,
        }
    }

    #[inline]
    pub fn period(self) -> Minutes {
        Minutes::new(self.minutes() as f64)
    }
}

impl TryFrom<u16> for DialCycle {
    type Error = ClockError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        match minutes {
            720 => Ok(DialCycle::TwelveHour),
            1440 => Ok(DialCycle::TwentyFourHour),
            other => Err(ClockError::configuration(format!(
                "dial cycle must be 720 or 1440 minutes, got {}",
                other
            ))),
        }
    }
}

impl From<DialCycle> for u16 {
    fn from(cycle: DialCycle) -> Self {
        cycle.minutes()
    }
}

/// Angle of a (possibly fractional) minute count on `cycle`.
#[inline]
pub fn minutes_to_angle(minutes: Minutes, cycle: DialCycle) -> Radians {
    let period = cycle.period().value();
    let phase = minutes.value().rem_euclid(period) / period;
    Radians::new(phase * TAU - FRAC_PI_2)
}

/// Angle of `t` on `cycle`.
#[inline]
pub fn to_angle(t: TimeOfDay, cycle: DialCycle) -> Radians {
    minutes_to_angle(t.quantity(), cycle)
}

/// Clockwise degrees from twelve o'clock to a dial angle.
#[inline]
pub fn dial_angle(clockwise: Degrees) -> Radians {
    (clockwise - Degrees::new(90.0)).to::<Radian>()
}

/// Hour, minute and second hand angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandAngles {
    pub hour: Radians,
    pub minute: Radians,
    pub second: Radians,
}

/// Hand angles for a wall-clock time.
///
/// Each hand folds in the next finer unit, so none of them jumps: the hour
/// hand moves with minutes, the minute hand with seconds, the second hand
/// with sub-second nanoseconds.
pub fn hand_angles(time: NaiveTime) -> HandAngles {
    let hour = (time.hour() % 12) as f64;
    let minute = time.minute() as f64;
    // leap-second nanos (>= 1e9) are clamped onto the last second
    let second = time.second() as f64 + (time.nanosecond().min(999_999_999) as f64 / 1e9);

    HandAngles {
        hour: dial_angle(Degrees::new((hour + minute / 60.0) * 30.0)),
        minute: dial_angle(Degrees::new((minute + second / 60.0) * 6.0)),
        second: dial_angle(Degrees::new(second * 6.0)),
    }
}

/// Where a window sits on an arc dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcAngles {
    pub start: Radians,
    /// `start` plus the swept angle; may exceed `3π/2` when the arc crosses twelve.
    pub end: Radians,
    /// Midpoint of the sweep, for the label.
    pub label: Radians,
}

/// Clockwise arc covering `interval` on `cycle`.
///
/// On the 12-hour dial a window longer than 720 minutes is capped at one
/// full turn.
pub fn arc_angles(interval: &PrayerInterval, cycle: DialCycle) -> ArcAngles {
    let start = to_angle(interval.start, cycle);
    let sweep_minutes = (interval.duration() as f64).min(cycle.minutes() as f64);
    let sweep = Radians::new(sweep_minutes / cycle.minutes() as f64 * TAU);

    ArcAngles {
        start,
        end: start + sweep,
        label: start + sweep * 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::resolve_intervals;
    use crate::schedule::tests::sample;
    use core::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn close(a: Radians, b: f64) -> bool {
        (a.value() - b).abs() < EPS
    }

    #[test]
    fn test_midnight_points_up() {
        assert!(close(to_angle(TimeOfDay::MIDNIGHT, DialCycle::TwelveHour), -FRAC_PI_2));
        assert!(close(to_angle(TimeOfDay::MIDNIGHT, DialCycle::TwentyFourHour), -FRAC_PI_2));
    }

    #[test]
    fn test_quarter_positions() {
        assert!(close(to_angle(tod("03:00"), DialCycle::TwelveHour), 0.0));
        assert!(close(to_angle(tod("06:00"), DialCycle::TwelveHour), FRAC_PI_2));
        assert!(close(to_angle(tod("06:00"), DialCycle::TwentyFourHour), 0.0));
        assert!(close(to_angle(tod("18:00"), DialCycle::TwentyFourHour), PI));
    }

    #[test]
    fn test_twelve_hour_dial_repeats() {
        assert_eq!(
            to_angle(tod("02:15"), DialCycle::TwelveHour),
            to_angle(tod("14:15"), DialCycle::TwelveHour)
        );
        assert_ne!(
            to_angle(tod("02:15"), DialCycle::TwentyFourHour),
            to_angle(tod("14:15"), DialCycle::TwentyFourHour)
        );
    }

    #[test]
    fn test_fractional_minutes() {
        let a = minutes_to_angle(Minutes::new(90.5), DialCycle::TwentyFourHour);
        assert!(close(a, 90.5 / 1440.0 * TAU - FRAC_PI_2));
        let wrapped = minutes_to_angle(Minutes::new(-30.0), DialCycle::TwentyFourHour);
        assert!(close(wrapped, 1410.0 / 1440.0 * TAU - FRAC_PI_2));
    }

    #[test]
    fn test_hand_angles_at_three() {
        let hands = hand_angles(NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert!(close(hands.hour, 0.0));
        assert!(close(hands.minute, -FRAC_PI_2));
        assert!(close(hands.second, -FRAC_PI_2));
    }

    #[test]
    fn test_hour_hand_does_not_jump() {
        let hands = hand_angles(NaiveTime::from_hms_opt(2, 30, 0).unwrap());
        // 2.5 h · 30° = 75°
        assert!(close(hands.hour, (75.0f64 - 90.0).to_radians()));
        assert!(close(hands.minute, FRAC_PI_2));
    }

    #[test]
    fn test_second_hand_sweeps() {
        let t = NaiveTime::from_hms_milli_opt(0, 0, 15, 500).unwrap();
        let hands = hand_angles(t);
        assert!(close(hands.second, (15.5f64 * 6.0 - 90.0).to_radians()));
        assert!(close(hands.minute, ((15.5f64 / 60.0) * 6.0 - 90.0).to_radians()));
    }

    #[test]
    fn test_arc_angles_are_contiguous() {
        let intervals = resolve_intervals(&sample());
        let arcs: Vec<_> = intervals
            .iter()
            .map(|i| arc_angles(i, DialCycle::TwentyFourHour))
            .collect();
        // Dhuhr→Asr→Maghrib→Isha share boundaries
        for pair in arcs[1..].windows(2) {
            assert!(close(pair[0].end, pair[1].start.value()));
        }
        // Isha closes one full turn after its own start minus its length
        let isha = arcs[4];
        assert!(isha.end > isha.start);
        assert!(close(
            isha.end - isha.start,
            555.0 / 1440.0 * TAU
        ));
        assert!(close(
            isha.label,
            (isha.start.value() + isha.end.value()) / 2.0
        ));
    }

    #[test]
    fn test_cycle_from_config_value() {
        assert_eq!(DialCycle::try_from(720).unwrap(), DialCycle::TwelveHour);
        assert!(DialCycle::try_from(600).is_err());
        assert_eq!(u16::from(DialCycle::TwentyFourHour), 1440);
    }
}
