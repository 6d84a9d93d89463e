//! Absolute date formatting (`YYYY-MM-DD HH:MM[:SS]`).

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

use stamp_types::{DateParts, TimeError, Timestamp};

/// Time zone a timestamp is resolved in before formatting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The system's local zone.
    #[default]
    Local,
    /// A fixed offset east of UTC, in seconds.
    Fixed(i32),
}

impl Zone {
    pub const UTC: Self = Zone::Fixed(0);

    /// Resolve `ts` to calendar components in this zone.
    pub fn resolve(self, ts: Timestamp) -> Result<DateParts, TimeError> {
        let utc = utc_datetime(ts)?;
        let parts = match self {
            Zone::Local => DateParts::from_datetime(&utc.with_timezone(&Local)),
            Zone::Fixed(secs) => {
                let offset = FixedOffset::east_opt(secs).ok_or(TimeError::InvalidOffset(secs))?;
                DateParts::from_datetime(&utc.with_timezone(&offset))
            }
        };
        // Shifting the last representable instant east can leave the calendar.
        parts.map_err(|_| TimeError::OutOfRange(ts.as_secs()))
    }
}

pub(crate) fn utc_datetime(ts: Timestamp) -> Result<DateTime<Utc>, TimeError> {
    DateTime::<Utc>::from_timestamp(ts.as_secs(), 0).ok_or(TimeError::OutOfRange(ts.as_secs()))
}

/// Format calendar components as `YYYY-MM-DD HH:MM`, adding `:SS` when
/// `show_seconds` is set. Every field but the year is padded to two digits.
pub fn format_date(parts: &DateParts, show_seconds: bool) -> String {
    let mut out = format!(
        "{}-{:02}-{:02} {:02}:{:02}",
        parts.year(),
        parts.month(),
        parts.day(),
        parts.hour(),
        parts.minute()
    );
    if show_seconds {
        out.push_str(&format!(":{:02}", parts.second()));
    }
    out
}

/// Resolve `ts` in `zone` and format it with [`format_date`].
pub fn format_timestamp(ts: Timestamp, zone: Zone, show_seconds: bool) -> Result<String, TimeError> {
    let parts = zone.resolve(ts)?;
    Ok(format_date(&parts, show_seconds))
}

/// [`format_timestamp`] in the system's local zone.
pub fn format_timestamp_local(ts: Timestamp, show_seconds: bool) -> Result<String, TimeError> {
    format_timestamp(ts, Zone::Local, show_seconds)
}

/// [`format_timestamp`] at a fixed offset east of UTC.
pub fn format_timestamp_with_offset(
    ts: Timestamp,
    offset_secs: i32,
    show_seconds: bool,
) -> Result<String, TimeError> {
    format_timestamp(ts, Zone::Fixed(offset_secs), show_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateParts {
        DateParts::new(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn pads_time_with_seconds() {
        let s = format_date(&parts(2017, 2, 15, 3, 5, 9), true);
        assert!(s.ends_with("03:05:09"));
        assert_eq!(s, "2017-02-15 03:05:09");
    }

    #[test]
    fn omits_seconds_when_not_requested() {
        let s = format_date(&parts(2017, 2, 15, 3, 5, 9), false);
        assert_eq!(s, "2017-02-15 03:05");
    }

    #[test]
    fn two_digit_fields_are_not_padded_further() {
        assert_eq!(format_date(&parts(1999, 12, 31, 23, 59, 58), true), "1999-12-31 23:59:58");
    }

    #[test]
    fn utc_resolution() {
        let s = format_timestamp(Timestamp::new(1_487_157_334), Zone::UTC, true).unwrap();
        assert_eq!(s, "2017-02-15 11:15:34");
    }

    #[test]
    fn fixed_offset_crosses_midnight() {
        // 2017-02-15 23:30:00 UTC
        let ts = Timestamp::new(1_487_201_400);
        assert_eq!(format_timestamp_with_offset(ts, 3600, false).unwrap(), "2017-02-16 00:30");
        assert_eq!(format_timestamp_with_offset(ts, -3600, false).unwrap(), "2017-02-15 22:30");
    }

    #[test]
    fn invalid_offset_is_rejected() {
        let err = format_timestamp_with_offset(Timestamp::EPOCH, 90_000, false).unwrap_err();
        assert_eq!(err, TimeError::InvalidOffset(90_000));
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let err = format_timestamp(Timestamp::new(i64::MAX), Zone::UTC, false).unwrap_err();
        assert_eq!(err, TimeError::OutOfRange(i64::MAX));
    }

    #[test]
    fn offset_past_calendar_end_is_out_of_range() {
        let last = DateTime::<Utc>::MAX_UTC.timestamp();
        let err = format_timestamp_with_offset(Timestamp::new(last), 86_399, true).unwrap_err();
        assert_eq!(err, TimeError::OutOfRange(last));
        assert!(format_timestamp(Timestamp::new(last), Zone::UTC, true).is_ok());
    }

    #[test]
    fn local_zone_formats_something_well_shaped() {
        let s = format_timestamp_local(Timestamp::new(1_487_157_334), true).unwrap();
        assert_eq!(s.len(), "2017-02-15 11:15:34".len());
        assert!(s.starts_with("2017-02-1"));
    }
}
