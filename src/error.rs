// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types shared by the schedule, provider and configuration layers.

/// Result type for clock operations.
pub type ClockResult<T> = Result<T, ClockError>;

/// Error type for clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// No schedule has been installed yet, or the last fetch failed.
    #[error("Schedule unavailable")]
    ScheduleUnavailable,

    /// A schedule value failed to parse or breaks the day-ordering invariant.
    #[error("Malformed schedule: {message}")]
    MalformedSchedule { message: String },

    /// The schedule provider failed (transport, HTTP status or payload decoding).
    #[error("Provider error: {message}")]
    Provider { message: String, retryable: bool },

    /// A provider call did not complete within the configured timeout.
    #[error("Timeout: {message}")]
    Timeout { message: String },

    /// Configuration file unreadable or holding invalid values.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClockError {
    /// Create a malformed-schedule error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSchedule {
            message: message.into(),
        }
    }

    /// Create a provider error that should not be retried.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            retryable: false,
        }
    }

    /// Create a provider error that may succeed on a later attempt.
    pub fn provider_retryable(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            retryable: true,
        }
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider { retryable, .. } => *retryable,
            Self::Timeout { .. } => true,
            _ => false,
        }
    }
}
