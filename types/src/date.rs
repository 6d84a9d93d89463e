//! Calendar components of a point in time, already resolved in a time zone.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::TimeError;

/// Year, month, day, hour, minute and second of a point in time.
///
/// The zone the components were resolved in is not recorded; callers decide
/// whether these are local or UTC wall-clock values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateParts {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl DateParts {
    /// Build calendar components, rejecting dates that do not exist
    /// (month 13, February 30th, hour 24 and so on).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate {
                reason: format!("{year}-{month}-{day} is not a calendar day"),
            });
        }
        if NaiveTime::from_hms_opt(hour, minute, second).is_none() {
            return Err(TimeError::InvalidDate {
                reason: format!("{hour}:{minute}:{second} is not a time of day"),
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Take the components of any chrono date-time value.
    ///
    /// A zoned chrono value can carry a local year past `NaiveDate::MAX`;
    /// those are rejected the same way [`DateParts::new`] rejects them.
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Result<Self, TimeError> {
        Self::new(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1–12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}
