//! Fixed-pattern timestamps
//!
//! Order and cook times are exchanged as text in exactly one shape,
//! `YYYY-MM-DD HH:MM:SS` (24-hour clock, zero padded). Parsing is strict:
//! chrono alone would accept `2024-3-5 9:07:00`, so the byte layout is
//! checked before handing the text to chrono.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CafeError, Result};

/// strftime pattern used in both directions
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_LEN: usize = 19;

/// A wall-clock instant with second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse `text`, reporting failures against `field` (e.g. `order_time`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimestamp` if `text` is not exactly `YYYY-MM-DD HH:MM:SS`
    /// or names a date/time that does not exist.
    pub fn parse(field: &str, text: &str) -> Result<Self> {
        let invalid = || CafeError::InvalidTimestamp {
            field: field.to_string(),
            value: text.to_string(),
        };

        if !has_fixed_shape(text) {
            return Err(invalid());
        }

        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
            .map(Timestamp)
            .map_err(|_| invalid())
    }

    /// Format back into the fixed pattern
    pub fn format(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Wrap a chrono value, dropping sub-second precision
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Timestamp(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Local wall-clock time now, truncated to whole seconds
    pub fn now() -> Self {
        Self::from_naive(chrono::Local::now().naive_local())
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// `self - earlier`; negative when `earlier` is actually later
    pub fn signed_duration_since(&self, earlier: Timestamp) -> Duration {
        self.0.signed_duration_since(earlier.0)
    }

    pub fn checked_add(&self, delta: Duration) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Timestamp)
    }

    pub fn checked_sub(&self, delta: Duration) -> Option<Self> {
        self.0.checked_sub_signed(delta).map(Timestamp)
    }
}

fn has_fixed_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b' ',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    })
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse("timestamp", s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Timestamp::parse("timestamp", &text).map_err(serde::de::Error::custom)
    }
}
