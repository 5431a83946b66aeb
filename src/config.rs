// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TOML configuration for the dial and the schedule provider.
//!
//! ```toml
//! [dial]
//! arc_cycle = 1440
//! clock_offset_minutes = 0
//!
//! [provider]
//! base_url = "https://api.waktusolat.app"
//! zone = "WLY01"
//! timeout_secs = 10
//! max_retries = 2
//! retry_delay_ms = 500
//! ```
//!
//! Every key is optional except a location (`zone`, or both `latitude` and
//! `longitude`) when a provider location is requested.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::angle::DialCycle;
use crate::error::{ClockError, ClockResult};
use crate::frame::DialConfig;
use crate::provider::{Location, RetryPolicy};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default)]
    pub dial: DialSettings,
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Dial rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialSettings {
    #[serde(default)]
    pub arc_cycle: DialCycle,
    /// Shifts only the clock hands; prayer logic stays on real time.
    #[serde(default)]
    pub clock_offset_minutes: i64,
}

/// Schedule provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

/// Largest accepted `clock_offset_minutes` magnitude.
pub const MAX_CLOCK_OFFSET_MINUTES: u64 = 1440;

fn default_base_url() -> String {
    "https://api.waktusolat.app".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            zone: None,
            latitude: None,
            longitude: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ClockConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ClockResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ClockError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ClockResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ClockError::configuration(format!("Failed to parse config: {}", e)))?;
        config.dial_config()?;
        Ok(config)
    }

    /// Dial settings for the frame producer.
    ///
    /// The hand offset must lie within one day either way.
    pub fn dial_config(&self) -> ClockResult<DialConfig> {
        let minutes = self.dial.clock_offset_minutes;
        if minutes.unsigned_abs() > MAX_CLOCK_OFFSET_MINUTES {
            return Err(ClockError::configuration(format!(
                "clock_offset_minutes must be within ±{}, got {}",
                MAX_CLOCK_OFFSET_MINUTES, minutes
            )));
        }
        let clock_offset = chrono::Duration::try_minutes(minutes).ok_or_else(|| {
            ClockError::configuration(format!("clock_offset_minutes out of range: {}", minutes))
        })?;
        Ok(DialConfig {
            arc_cycle: self.dial.arc_cycle,
            clock_offset,
        })
    }

    /// Where to fetch the schedule for. A zone wins over coordinates.
    pub fn location(&self) -> ClockResult<Location> {
        let provider = &self.provider;
        match (&provider.zone, provider.latitude, provider.longitude) {
            (Some(zone), _, _) if !zone.trim().is_empty() => {
                Ok(Location::Zone(zone.trim().to_string()))
            }
            (_, Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                    return Err(ClockError::configuration(format!(
                        "coordinates out of range: {}, {}",
                        latitude, longitude
                    )));
                }
                Ok(Location::Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(ClockError::configuration(
                "provider requires 'zone' or both 'latitude' and 'longitude'",
            )),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout: Duration::from_secs(self.provider.timeout_secs),
            max_retries: self.provider.max_retries,
            retry_delay: Duration::from_millis(self.provider.retry_delay_ms),
        }
    }
}
