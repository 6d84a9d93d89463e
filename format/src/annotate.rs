//! Title/text annotation of timestamped page elements.
//!
//! An element carries a raw Unix timestamp attribute plus two optional
//! markers. Annotating it yields the hover title and the visible text: one
//! is the relative duration, the other the absolute date.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use stamp_types::{TimeError, Timestamp};

use crate::date::{format_timestamp, Zone};
use crate::duration::format_duration;

/// Title placed on the page header date.
pub const LOCAL_TIME_TITLE: &str = "In local time";

/// Per-element display markers. The two flags are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFlags {
    /// Show the relative duration as text and the absolute date (with
    /// seconds) as title, instead of the other way round.
    #[serde(default)]
    pub swap: bool,
    /// Only set the title, leave the visible text alone.
    #[serde(default)]
    pub title_only: bool,
}

/// Strings to apply to an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub title: String,
    /// `None` when the visible text must stay as rendered by the server.
    pub text: Option<String>,
}

/// Parse a timestamp attribute the lenient way page scripts do: leading
/// whitespace is skipped, an optional sign and a run of digits are read, and
/// anything after the digits is ignored.
///
/// Returns `None` when there are no digits, the value overflows, or the
/// value is zero (an unset timestamp).
pub fn parse_timestamp_attr(raw: &str) -> Option<Timestamp> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let secs = if negative { -magnitude } else { magnitude };
    (secs != 0).then(|| Timestamp::new(secs))
}

/// Build the title and text for an element stamped with `ts`.
pub fn annotate(
    ts: Timestamp,
    now: Timestamp,
    flags: DisplayFlags,
    zone: Zone,
) -> Result<Annotation, TimeError> {
    let relative = format_duration(ts.elapsed_since(now));
    let absolute = format_timestamp(ts, zone, flags.swap)?;

    let (title, text) = if flags.swap {
        (absolute, relative)
    } else {
        (relative, absolute)
    };

    Ok(Annotation {
        title,
        text: (!flags.title_only).then_some(text),
    })
}

/// Parse a raw attribute and annotate it. Elements whose attribute cannot be
/// used are skipped rather than reported as errors.
pub fn annotate_attr(
    raw: &str,
    now: Timestamp,
    flags: DisplayFlags,
    zone: Zone,
) -> Option<Annotation> {
    let Some(ts) = parse_timestamp_attr(raw) else {
        debug!(raw, "skipping element without a usable timestamp");
        return None;
    };
    match annotate(ts, now, flags, zone) {
        Ok(annotation) => Some(annotation),
        Err(e) => {
            warn!(timestamp = ts.as_secs(), error = %e, "cannot annotate timestamp");
            None
        }
    }
}
