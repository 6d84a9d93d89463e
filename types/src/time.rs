//! Timestamp type used throughout stamp.
//!
//! Timestamps are Unix epoch seconds (UTC). They are signed so that dates
//! before 1970 and "in the future" differences stay representable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    ///
    /// A clock set before the epoch yields a negative timestamp.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => Self(i64::try_from(d.as_secs()).unwrap_or(i64::MAX)),
            Err(e) => Self(-i64::try_from(e.duration().as_secs()).unwrap_or(i64::MAX)),
        }
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Signed seconds elapsed between this timestamp and `now`.
    ///
    /// Positive when `self` is in the past relative to `now`, negative when
    /// it lies in the future.
    pub fn elapsed_since(&self, now: Timestamp) -> i64 {
        now.0.saturating_sub(self.0)
    }

    /// Signed seconds from `now` until this timestamp.
    pub fn seconds_until(&self, now: Timestamp) -> i64 {
        self.0.saturating_sub(now.0)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
