// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated daily prayer schedule.
//!
//! A [`PrayerSchedule`] is built once per successful fetch from six
//! time-of-day values and is immutable afterwards. Construction enforces the
//! day-ordering invariant:
//!
//! ```text
//! Fajr < Sunrise < Dhuhr < Asr < Maghrib      (plain minutes)
//! Isha > Maghrib  or  Isha < Fajr             (Isha may fall past midnight)
//! ```
//!
//! Anything else, including two markers sharing a start, is rejected with
//! [`ClockError::MalformedSchedule`] instead of being resolved by guesswork.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{ClockError, ClockResult};
use crate::prayer::Prayer;
use crate::time_of_day::TimeOfDay;

/// Unparsed schedule as delivered by a provider: six `HH:MM[:SS]` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSchedule {
    pub fajr: String,
    #[serde(alias = "syuruk")]
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl RawSchedule {
    pub fn new(
        fajr: impl Into<String>,
        sunrise: impl Into<String>,
        dhuhr: impl Into<String>,
        asr: impl Into<String>,
        maghrib: impl Into<String>,
        isha: impl Into<String>,
    ) -> Self {
        Self {
            fajr: fajr.into(),
            sunrise: sunrise.into(),
            dhuhr: dhuhr.into(),
            asr: asr.into(),
            maghrib: maghrib.into(),
            isha: isha.into(),
        }
    }

    fn field(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Sunrise => &self.sunrise,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}

/// One day's six marker times, indexed by [`Prayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSchedule {
    times: [TimeOfDay; 6],
}

impl PrayerSchedule {
    /// Build from times in canonical order (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha).
    pub fn new(times: [TimeOfDay; 6]) -> ClockResult<Self> {
        let schedule = Self { times };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Parse and validate a provider payload.
    pub fn from_raw(raw: &RawSchedule) -> ClockResult<Self> {
        let mut times = [TimeOfDay::MIDNIGHT; 6];
        for prayer in Prayer::ALL {
            times[prayer.index()] = TimeOfDay::parse(raw.field(prayer)).map_err(|e| {
                ClockError::malformed(format!("{}: {}", prayer, error_detail(&e)))
            })?;
        }
        Self::new(times)
    }

    /// Parse six strings in canonical order.
    pub fn parse(values: [&str; 6]) -> ClockResult<Self> {
        let [fajr, sunrise, dhuhr, asr, maghrib, isha] = values;
        Self::from_raw(&RawSchedule::new(fajr, sunrise, dhuhr, asr, maghrib, isha))
    }

    #[inline]
    pub fn get(&self, prayer: Prayer) -> TimeOfDay {
        self.times[prayer.index()]
    }

    /// Marker times in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, TimeOfDay)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Whether Isha falls after midnight, before the day's Fajr.
    #[inline]
    pub fn isha_after_midnight(&self) -> bool {
        self.get(Prayer::Isha) < self.get(Prayer::Fajr)
    }

    fn validate(&self) -> ClockResult<()> {
        for pair in Prayer::ALL[..5].windows(2) {
            let (earlier, later) = (pair[0], pair[1]);
            if self.get(earlier) >= self.get(later) {
                return Err(ClockError::malformed(format!(
                    "{} ({}) must be before {} ({})",
                    earlier,
                    self.get(earlier),
                    later,
                    self.get(later)
                )));
            }
        }

        let isha = self.get(Prayer::Isha);
        if isha > self.get(Prayer::Maghrib) || isha < self.get(Prayer::Fajr) {
            Ok(())
        } else {
            Err(ClockError::malformed(format!(
                "Isha ({}) must follow Maghrib ({}) or fall after midnight before Fajr ({})",
                isha,
                self.get(Prayer::Maghrib),
                self.get(Prayer::Fajr)
            )))
        }
    }
}

impl Index<Prayer> for PrayerSchedule {
    type Output = TimeOfDay;

    fn index(&self, prayer: Prayer) -> &Self::Output {
        &self.times[prayer.index()]
    }
}

fn error_detail(err: &ClockError) -> String {
    match err {
        ClockError::MalformedSchedule { message } => message.clone(),
        other => other.to_string(),
    }
}
