// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Countdown to the next prayer.

use serde::Serialize;
use std::fmt;

use crate::prayer::Prayer;
use crate::schedule::PrayerSchedule;
use crate::time_of_day::{TimeOfDay, MINUTES_PER_DAY};

/// Next prayer and the minutes left until it starts.
///
/// `minutes_remaining` is always in `[1, 1440)`: a prayer starting exactly
/// now is already current, so the countdown targets the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub target: Prayer,
    pub minutes_remaining: u16,
}

impl Countdown {
    #[inline]
    pub fn hours(&self) -> u16 {
        self.minutes_remaining / 60
    }

    #[inline]
    pub fn minutes(&self) -> u16 {
        self.minutes_remaining % 60
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Next: {} in {}h {}m",
            self.target,
            self.hours(),
            self.minutes()
        )
    }
}

/// The first prayer starting strictly after `t`, wrapping to tomorrow's
/// earliest prayer when `t` is past the last one. Sunrise is never a target.
pub fn next_prayer(schedule: &PrayerSchedule, t: TimeOfDay) -> Countdown {
    let candidate = |target: Prayer| {
        // a start equal to `t` is a full day away
        let ahead = t.minutes_until(schedule[target]);
        Countdown {
            target,
            minutes_remaining: if ahead == 0 { MINUTES_PER_DAY } else { ahead },
        }
    };

    Prayer::WINDOWS[1..]
        .iter()
        .map(|&p| candidate(p))
        .fold(candidate(Prayer::Fajr), |best, c| {
            if c.minutes_remaining < best.minutes_remaining {
                c
            } else {
                best
            }
        })
}
