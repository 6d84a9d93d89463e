//! Server-side template filters for timestamps stored as naive UTC values.
//!
//! Search index documents carry times as `YYYY-MM-DDTHH:MM:SS` strings;
//! database rows carry naive UTC datetimes.

use chrono::{DateTime, NaiveDateTime, Utc};

use stamp_types::{TimeError, Timestamp};

use crate::date::utc_datetime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S -0000";

fn parse_iso(input: &str) -> Result<NaiveDateTime, TimeError> {
    NaiveDateTime::parse_from_str(input, ISO_FORMAT).map_err(|e| TimeError::Parse {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Unix seconds of an ISO string interpreted as UTC.
pub fn utc_time(input: &str) -> Result<i64, TimeError> {
    Ok(utc_timestamp(&parse_iso(input)?))
}

/// Unix seconds of a naive UTC datetime.
pub fn utc_timestamp(dt: &NaiveDateTime) -> i64 {
    dt.and_utc().timestamp()
}

/// Reformat an ISO string as `YYYY-MM-DD HH:MM`.
pub fn display_time(input: &str) -> Result<String, TimeError> {
    Ok(parse_iso(input)?.format("%Y-%m-%d %H:%M").to_string())
}

fn format_rfc822(dt: &DateTime<Utc>) -> String {
    dt.format(RFC822_FORMAT).to_string()
}

/// RFC 2822 date for feeds, always in UTC with the `-0000` zone marker.
pub fn rfc822(ts: Timestamp) -> Result<String, TimeError> {
    Ok(format_rfc822(&utc_datetime(ts)?))
}

/// [`rfc822`] for an ISO string from a search index document, read as UTC.
pub fn rfc822_es(input: &str) -> Result<String, TimeError> {
    let ts = Timestamp::new(utc_time(input)?);
    Ok(format_rfc822(&utc_datetime(ts)?))
}

/// "5 seconds ago" style text for anything under a day old, the UTC date
/// for anything older. Times at or after `now` read `default`.
pub fn timesince(then: &NaiveDateTime, now: &NaiveDateTime, default: &str) -> String {
    let diff = now.signed_duration_since(*then);
    if diff.num_days() >= 1 {
        return then.format("%Y-%m-%d %H:%M UTC").to_string();
    }

    let secs = diff.num_seconds();
    let periods = [
        (secs / 3600, "hour", "hours"),
        (secs / 60, "minute", "minutes"),
        (secs, "second", "seconds"),
    ];
    periods
        .into_iter()
        .find(|(count, _, _)| *count >= 1)
        .map(|(count, singular, plural)| {
            format!("{count} {} ago", if count == 1 { singular } else { plural })
        })
        .unwrap_or_else(|| default.to_string())
}
