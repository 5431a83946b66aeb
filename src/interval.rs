// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer windows on the day circle.
//!
//! Each window runs from its prayer's start to the start of its fixed
//! successor (Fajr→Sunrise, Dhuhr→Asr, Asr→Maghrib, Maghrib→Isha,
//! Isha→next day's Fajr). Windows are half-open `[start, end)`, so the prayer
//! starting at a boundary owns that instant.
//!
//! The span between Sunrise and Dhuhr belongs to no prayer. Together with the
//! five windows it tiles the 1440-minute circle exactly once:
//!
//! ```text
//! Fajr | forenoon | Dhuhr | Asr | Maghrib | Isha ⟲
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{ClockError, ClockResult};
use crate::prayer::Prayer;
use crate::schedule::PrayerSchedule;
use crate::time_of_day::{TimeOfDay, MINUTES_PER_DAY};

/// A prayer window.
///
/// `end` is `start + duration` in plain minutes and exceeds 1440 when the
/// window crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrayerInterval {
    pub prayer: Prayer,
    pub start: TimeOfDay,
    pub end: u16,
    pub wraps_midnight: bool,
}

impl PrayerInterval {
    fn between(prayer: Prayer, start: TimeOfDay, closing: TimeOfDay) -> Self {
        let end = start.minutes() + start.minutes_until(closing);
        PrayerInterval {
            prayer,
            start,
            end,
            wraps_midnight: end > MINUTES_PER_DAY,
        }
    }

    /// Length of the window in minutes.
    #[inline]
    pub fn duration(&self) -> u16 {
        self.end - self.start.minutes()
    }

    /// The closing boundary folded back onto the day.
    #[inline]
    pub fn end_time(&self) -> TimeOfDay {
        TimeOfDay::wrapping(self.end as i64)
    }

    /// Whether `t` falls inside `[start, end)`, measured around the circle.
    #[inline]
    pub fn contains(&self, t: TimeOfDay) -> bool {
        t.within(self.start, self.duration())
    }
}

impl fmt::Display for PrayerInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} to {}", self.prayer, self.start, self.end_time())?;
        if self.wraps_midnight {
            f.write_str(" (+1d)")?;
        }
        Ok(())
    }
}

/// What owns a given minute of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DaySpan {
    Prayer(Prayer),
    /// Between Sunrise and Dhuhr.
    Forenoon,
}

impl DaySpan {
    #[inline]
    pub fn prayer(self) -> Option<Prayer> {
        match self {
            DaySpan::Prayer(p) => Some(p),
            DaySpan::Forenoon => None,
        }
    }
}

/// The five prayer windows in Fajr, Dhuhr, Asr, Maghrib, Isha order.
pub fn resolve_intervals(schedule: &PrayerSchedule) -> [PrayerInterval; 5] {
    Prayer::WINDOWS.map(|p| PrayerInterval::between(p, schedule[p], schedule[p.successor()]))
}

/// The window that starts at `prayer`, or `None` for Sunrise.
pub fn interval_of(schedule: &PrayerSchedule, prayer: Prayer) -> Option<PrayerInterval> {
    prayer
        .is_window()
        .then(|| PrayerInterval::between(prayer, schedule[prayer], schedule[prayer.successor()]))
}

fn forenoon(schedule: &PrayerSchedule) -> (TimeOfDay, u16) {
    let sunrise = schedule[Prayer::Sunrise];
    (sunrise, sunrise.minutes_until(schedule[Prayer::Dhuhr]))
}

/// Owner of minute `t`.
///
/// Fails with [`ClockError::MalformedSchedule`] when `t` matches no span or
/// more than one.
pub fn resolve_span(schedule: &PrayerSchedule, t: TimeOfDay) -> ClockResult<DaySpan> {
    let (forenoon_start, forenoon_len) = forenoon(schedule);
    let mut owners = resolve_intervals(schedule)
        .into_iter()
        .filter(|i| i.contains(t))
        .map(|i| DaySpan::Prayer(i.prayer))
        .chain(t.within(forenoon_start, forenoon_len).then_some(DaySpan::Forenoon));

    match (owners.next(), owners.next()) {
        (Some(owner), None) => Ok(owner),
        (None, _) => Err(ClockError::malformed(format!("no window contains {}", t))),
        (Some(first), Some(second)) => Err(ClockError::malformed(format!(
            "{} is claimed by both {:?} and {:?}",
            t, first, second
        ))),
    }
}

/// The active prayer at `t`; `None` in the forenoon or for an inconsistent schedule.
///
/// Both cases yield the same `None`. Callers that must tell the forenoon gap
/// apart from a malformed schedule should use [`resolve_span`], which returns
/// [`DaySpan::Forenoon`] for the former and an error for the latter.
pub fn active_interval(schedule: &PrayerSchedule, t: TimeOfDay) -> Option<Prayer> {
    match resolve_span(schedule, t) {
        Ok(span) => span.prayer(),
        Err(err) => {
            log::warn!("cannot resolve active window at {}: {}", t, err);
            None
        }
    }
}

/// Probe every minute of the day and check each has exactly one owner.
pub fn verify_coverage(schedule: &PrayerSchedule) -> ClockResult<()> {
    (0..MINUTES_PER_DAY)
        .filter_map(TimeOfDay::new)
        .try_for_each(|t| resolve_span(schedule, t).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tests::sample;

    fn tod(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_resolve_intervals_order_and_bounds() {
        let intervals = resolve_intervals(&sample());
        let names: Vec<_> = intervals.iter().map(|i| i.prayer).collect();
        assert_eq!(names, Prayer::WINDOWS);

        assert_eq!(intervals[0].start, tod("05:50"));
        assert_eq!(intervals[0].end_time(), tod("07:10"));
        assert_eq!(intervals[1].end_time(), tod("16:30"));
        assert_eq!(intervals[2].end_time(), tod("19:20"));
        assert_eq!(intervals[3].end_time(), tod("20:35"));
        assert!(intervals[..4].iter().all(|i| !i.wraps_midnight));
    }

    #[test]
    fn test_isha_wraps_into_next_fajr() {
        let isha = resolve_intervals(&sample())[4];
        assert!(isha.wraps_midnight);
        assert_eq!(isha.end, 350 + 1440);
        assert_eq!(isha.duration(), 555);
        assert_eq!(isha.to_string(), "Isha 20:35 to 05:50 (+1d)");
    }

    #[test]
    fn test_active_interval_wraparound() {
        let s = sample();
        assert_eq!(active_interval(&s, tod("23:50")), Some(Prayer::Isha));
        assert_eq!(active_interval(&s, tod("00:00")), Some(Prayer::Isha));
        assert_eq!(active_interval(&s, tod("05:00")), Some(Prayer::Isha));
        assert_eq!(active_interval(&s, tod("05:50")), Some(Prayer::Fajr));
    }

    #[test]
    fn test_boundary_belongs_to_starting_prayer() {
        let s = sample();
        assert_eq!(active_interval(&s, tod("19:19")), Some(Prayer::Asr));
        assert_eq!(active_interval(&s, tod("19:20")), Some(Prayer::Maghrib));
        assert_eq!(active_interval(&s, tod("13:15")), Some(Prayer::Dhuhr));
        assert_eq!(active_interval(&s, tod("20:35")), Some(Prayer::Isha));
    }

    #[test]
    fn test_forenoon_has_no_active_prayer() {
        let s = sample();
        assert_eq!(active_interval(&s, tod("07:10")), None);
        assert_eq!(active_interval(&s, tod("10:00")), None);
        assert_eq!(resolve_span(&s, tod("13:14")).unwrap(), DaySpan::Forenoon);
        assert_eq!(active_interval(&s, tod("07:09")), Some(Prayer::Fajr));
    }

    #[test]
    fn test_resolve_span_tells_forenoon_apart_from_no_prayer() {
        let s = sample();
        for t in ["07:10", "10:00", "13:14"] {
            assert_eq!(active_interval(&s, tod(t)), None);
            assert_eq!(resolve_span(&s, tod(t)), Ok(DaySpan::Forenoon));
        }
        assert_eq!(
            resolve_span(&s, tod("13:15")),
            Ok(DaySpan::Prayer(Prayer::Dhuhr))
        );
    }

    #[test]
    fn test_every_minute_has_one_owner() {
        assert!(verify_coverage(&sample()).is_ok());
    }

    #[test]
    fn test_isha_after_midnight_shifts_the_wrap_to_maghrib() {
        let s = PrayerSchedule::parse(["03:10", "04:40", "13:20", "17:45", "22:30", "00:40"])
            .unwrap();
        let intervals = resolve_intervals(&s);
        let maghrib = intervals[3];
        let isha = intervals[4];
        assert!(maghrib.wraps_midnight);
        assert!(!isha.wraps_midnight);
        assert_eq!(isha.end_time(), tod("03:10"));

        assert_eq!(active_interval(&s, tod("23:59")), Some(Prayer::Maghrib));
        assert_eq!(active_interval(&s, tod("00:40")), Some(Prayer::Isha));
        assert_eq!(active_interval(&s, tod("03:10")), Some(Prayer::Fajr));
        assert!(verify_coverage(&s).is_ok());
    }

    #[test]
    fn test_interval_of_sunrise_is_none() {
        let s = sample();
        assert!(interval_of(&s, Prayer::Sunrise).is_none());
        assert_eq!(interval_of(&s, Prayer::Asr), Some(resolve_intervals(&s)[2]));
    }

    #[test]
    fn test_durations_tile_the_day() {
        let s = sample();
        let (_, forenoon_len) = forenoon(&s);
        let total: u16 = resolve_intervals(&s).iter().map(|i| i.duration()).sum();
        assert_eq!(total + forenoon_len, MINUTES_PER_DAY);
    }
}
