// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Current-schedule holder.
//!
//! The store keeps at most one [`PrayerSchedule`] and swaps it wholesale.
//! Readers take an `Arc` snapshot, so a frame in progress keeps the schedule
//! it started with even if a refresh lands mid-frame.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{ClockError, ClockResult};
use crate::schedule::PrayerSchedule;

#[derive(Debug, Default)]
pub struct ScheduleStore {
    current: RwLock<Option<Arc<PrayerSchedule>>>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `schedule`.
    pub fn with_schedule(schedule: PrayerSchedule) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(schedule))),
        }
    }

    /// Replace the current schedule, returning the one it displaced.
    pub fn install(&self, schedule: PrayerSchedule) -> Option<Arc<PrayerSchedule>> {
        let next = Arc::new(schedule);
        log::debug!("installing schedule {:?}", next);
        self.current.write().replace(next)
    }

    /// Drop the current schedule.
    pub fn clear(&self) -> Option<Arc<PrayerSchedule>> {
        self.current.write().take()
    }

    /// The current schedule, if any.
    pub fn snapshot(&self) -> Option<Arc<PrayerSchedule>> {
        self.current.read().clone()
    }

    /// The current schedule, or [`ClockError::ScheduleUnavailable`].
    pub fn require(&self) -> ClockResult<Arc<PrayerSchedule>> {
        self.snapshot().ok_or(ClockError::ScheduleUnavailable)
    }

    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }
}
