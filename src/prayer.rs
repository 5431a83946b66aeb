// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The six daily markers of a prayer schedule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClockError;

/// A daily marker, in canonical day order.
///
/// Five of them own a window on the dial. [`Prayer::Sunrise`] is only a
/// boundary: it closes the Fajr window and splits day from night.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All markers in canonical day order.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// The five markers that own a window.
    pub const WINDOWS: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Position in [`Prayer::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this marker owns a window.
    #[inline]
    pub const fn is_window(self) -> bool {
        !matches!(self, Prayer::Sunrise)
    }

    /// The marker whose start closes this one's window.
    pub const fn successor(self) -> Prayer {
        match self {
            Prayer::Fajr => Prayer::Sunrise,
            Prayer::Sunrise => Prayer::Dhuhr,
            Prayer::Dhuhr => Prayer::Asr,
            Prayer::Asr => Prayer::Maghrib,
            Prayer::Maghrib => Prayer::Isha,
            Prayer::Isha => Prayer::Fajr,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Display color the renderer keys on. Sunrise has no arc and no color.
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Prayer::Fajr => Some("#00BFFF"),
            Prayer::Sunrise => None,
            Prayer::Dhuhr => Some("#B8860B"),
            Prayer::Asr => Some("#FF8C00"),
            Prayer::Maghrib => Some("#DC143C"),
            Prayer::Isha => Some("#8A2BE2"),
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prayer {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fajr" | "subuh" => Ok(Prayer::Fajr),
            "sunrise" | "syuruk" => Ok(Prayer::Sunrise),
            "dhuhr" | "zohor" => Ok(Prayer::Dhuhr),
            "asr" | "asar" => Ok(Prayer::Asr),
            "maghrib" => Ok(Prayer::Maghrib),
            "isha" | "isyak" => Ok(Prayer::Isha),
            other => Err(ClockError::malformed(format!("unknown prayer {:?}", other))),
        }
    }
}
