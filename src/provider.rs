// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Schedule providers and the refresh boundary.
//!
//! A [`ScheduleProvider`] turns a [`ScheduleRequest`] into a [`RawSchedule`]
//! or fails. [`refresh`] is the only place provider errors are handled: it
//! applies a timeout, retries retryable failures with exponential backoff,
//! validates the payload, and installs it into a [`ScheduleStore`]. On
//! failure the store keeps whatever it held before, so the frame loop simply
//! goes on rendering the previous schedule or the "unavailable" state.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{ClockError, ClockResult};
use crate::interval::verify_coverage;
use crate::schedule::{PrayerSchedule, RawSchedule};
use crate::store::ScheduleStore;

/// Where the schedule is for.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A provider-specific zone identifier, e.g. `"WLY01"`.
    Zone(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Zone(zone) => write!(f, "zone {}", zone),
            Location::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{:.4},{:.4}", latitude, longitude),
        }
    }
}

/// One fetch: a location and the day of month to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub location: Location,
    /// Day of month, `1..=31`.
    pub day: u32,
}

impl ScheduleRequest {
    pub fn new(location: Location, day: u32) -> Self {
        Self { location, day }
    }

    /// Request for the schedule of `date`.
    pub fn for_date(location: Location, date: NaiveDate) -> Self {
        Self::new(location, date.day())
    }

    /// Request for today's schedule, local calendar.
    pub fn today(location: Location) -> Self {
        Self::for_date(location, chrono::Local::now().date_naive())
    }

    /// Whether this request already targets `date`.
    pub fn is_for(&self, date: NaiveDate) -> bool {
        self.day == date.day()
    }
}

/// Source of daily schedules.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn fetch(&self, request: &ScheduleRequest) -> ClockResult<RawSchedule>;
}

/// Provider returning a fixed answer, for tests and offline use.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    response: ClockResult<RawSchedule>,
}

impl StaticProvider {
    pub fn new(raw: RawSchedule) -> Self {
        Self { response: Ok(raw) }
    }

    pub fn failing(error: ClockError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

#[async_trait]
impl ScheduleProvider for StaticProvider {
    async fn fetch(&self, _request: &ScheduleRequest) -> ClockResult<RawSchedule> {
        self.response.clone()
    }
}

/// Timeout and retry budget for one [`refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Extra attempts after the first.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// No retries, same timeout.
    pub fn once(timeout: Duration) -> Self {
        Self {
            timeout,
            max_retries: 0,
            retry_delay: Duration::ZERO,
        }
    }

    fn backoff(&self, retry: u32) -> Duration {
        1u32.checked_shl(retry)
            .and_then(|factor| self.retry_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }
}

async fn fetch_with_timeout<P>(
    provider: &P,
    request: &ScheduleRequest,
    timeout: Duration,
) -> ClockResult<RawSchedule>
where
    P: ScheduleProvider + ?Sized,
{
    match tokio::time::timeout(timeout, provider.fetch(request)).await {
        Ok(result) => result,
        Err(_) => Err(ClockError::timeout(format!(
            "schedule fetch for {} exceeded {:?}",
            request.location, timeout
        ))),
    }
}

/// Fetch, validate and install a schedule.
///
/// Returns the installed snapshot. Every failure is logged here; callers only
/// need the result to decide whether to try again later.
pub async fn refresh<P>(
    store: &ScheduleStore,
    provider: &P,
    request: &ScheduleRequest,
    policy: &RetryPolicy,
) -> ClockResult<Arc<PrayerSchedule>>
where
    P: ScheduleProvider + ?Sized,
{
    let mut attempt = 0;
    let raw = loop {
        match fetch_with_timeout(provider, request, policy.timeout).await {
            Ok(raw) => break raw,
            Err(err) if err.is_retryable() && attempt < policy.max_retries => {
                let delay = policy.backoff(attempt);
                attempt += 1;
                log::warn!(
                    "schedule fetch for {} failed (attempt {}/{}): {}; retrying in {:?}",
                    request.location,
                    attempt,
                    policy.max_retries + 1,
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                log::error!("schedule fetch for {} failed: {}", request.location, err);
                return Err(err);
            }
        }
    };

    let schedule = PrayerSchedule::from_raw(&raw)
        .and_then(|s| verify_coverage(&s).map(|_| s))
        .inspect_err(|err| {
            log::error!(
                "rejecting schedule for {} (day {}): {}",
                request.location,
                request.day,
                err
            )
        })?;

    store.install(schedule);
    log::info!(
        "installed prayer schedule for {} (day {})",
        request.location,
        request.day
    );
    store.require()
}
