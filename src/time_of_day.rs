// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Minutes since local midnight.
//!
//! [`TimeOfDay`] is the single time representation used by the interval
//! engine. It is always inside `[0, 1440)`; every operation that could leave
//! that range folds back with Euclidean remainder, so midnight wraparound is
//! handled in one place.
//!
//! Parsing is strict: `"HH:MM"` or `"HH:MM:SS"`. Only the hour and minute
//! carry the value, but a seconds suffix must still be well formed.

use chrono::{NaiveTime, Timelike};
use qtty::Minutes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ClockError, ClockResult};

/// Number of minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day, in whole minutes since local midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Local midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create from a minute count, or `None` if outside `[0, 1440)`.
    #[inline]
    pub const fn new(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Create from any signed minute count, folding it onto the day circle.
    #[inline]
    pub fn wrapping(minutes: i64) -> Self {
        Self(minutes.rem_euclid(MINUTES_PER_DAY as i64) as u16)
    }

    /// Create from an hour and minute pair, or `None` if either is out of range.
    #[inline]
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour as u16 * 60 + minute as u16))
        } else {
            None
        }
    }

    /// Truncate a wall-clock time to its minute.
    #[inline]
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Strict `HH:MM` / `HH:MM:SS` parser.
    pub fn parse(value: &str) -> ClockResult<Self> {
        let bytes = value.as_bytes();
        let well_formed = match bytes.len() {
            5 => bytes[2] == b':',
            8 => bytes[2] == b':' && bytes[5] == b':' && two_digits(&bytes[6..8]).is_some(),
            _ => false,
        };
        if !well_formed {
            return Err(ClockError::malformed(format!(
                "expected HH:MM or HH:MM:SS, got {:?}",
                value
            )));
        }

        let hour = two_digits(&bytes[0..2]);
        let minute = two_digits(&bytes[3..5]);
        if let Some(seconds) = bytes.get(6..8).and_then(two_digits) {
            if seconds >= 60 {
                return Err(ClockError::malformed(format!(
                    "seconds out of range in {:?}",
                    value
                )));
            }
        }

        match (hour, minute) {
            (Some(h), Some(m)) => Self::from_hm(h, m).ok_or_else(|| {
                ClockError::malformed(format!("time of day out of range: {:?}", value))
            }),
            _ => Err(ClockError::malformed(format!(
                "non-numeric time of day: {:?}",
                value
            ))),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Minutes since midnight.
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes since midnight as a typed quantity.
    #[inline]
    pub fn quantity(self) -> Minutes {
        Minutes::new(self.0 as f64)
    }

    // ── circular arithmetic ───────────────────────────────────────────

    /// Forward distance around the day circle from `self` to `other`, in `[0, 1440)`.
    #[inline]
    pub const fn minutes_until(self, other: TimeOfDay) -> u16 {
        (other.0 + MINUTES_PER_DAY - self.0) % MINUTES_PER_DAY
    }

    /// Whether `self` lies in the half-open circular range `[start, start + length)`.
    #[inline]
    pub const fn within(self, start: TimeOfDay, length: u16) -> bool {
        start.minutes_until(self) < length
    }

    /// Shift forward (or backward for negative deltas), wrapping at midnight.
    #[inline]
    pub fn add_minutes(self, delta: i64) -> Self {
        Self::wrapping(self.0 as i64 + delta)
    }
}

fn two_digits(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => Some((a - b'0') * 10 + (b - b'0')),
        _ => None,
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    #[inline]
    fn from(time: NaiveTime) -> Self {
        Self::from_naive_time(time)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
