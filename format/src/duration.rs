//! Relative duration formatting ("1 day 1 hour ago", "After 5 seconds").

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// A unit of elapsed time. Months and years have fixed approximate lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// All units, largest first.
pub const UNITS: [TimeUnit; 7] = [
    TimeUnit::Year,
    TimeUnit::Month,
    TimeUnit::Week,
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
];

impl TimeUnit {
    pub const fn seconds(self) -> u64 {
        match self {
            TimeUnit::Year => YEAR,
            TimeUnit::Month => MONTH,
            TimeUnit::Week => WEEK,
            TimeUnit::Day => DAY,
            TimeUnit::Hour => HOUR,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Second => SECOND,
        }
    }

    /// Singular label.
    pub const fn label(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

/// Split `seconds` into whole counts per unit, largest unit first.
///
/// Units with a zero count are left out, so `decompose(0)` is empty.
pub fn decompose(seconds: u64) -> Vec<(TimeUnit, u64)> {
    let mut remaining = seconds;
    let mut terms = Vec::new();
    for unit in UNITS {
        let count = remaining / unit.seconds();
        if count > 0 {
            terms.push((unit, count));
            remaining -= count * unit.seconds();
        }
    }
    terms
}

/// Format a signed number of elapsed seconds as a human-readable string.
///
/// Positive values are in the past ("1 minute 5 seconds ago"), negative
/// values in the future ("After 5 seconds"), zero is "Just now".
pub fn format_duration(seconds: i64) -> String {
    if seconds == 0 {
        return "Just now".to_string();
    }
    let (prefix, suffix) = if seconds < 0 { ("After ", "") } else { ("", " ago") };

    let terms: Vec<String> = decompose(seconds.unsigned_abs())
        .into_iter()
        .map(|(unit, count)| {
            let plural = if count == 1 { "" } else { "s" };
            format!("{count} {}{plural}", unit.label())
        })
        .collect();

    format!("{prefix}{}{suffix}", terms.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_just_now() {
        assert_eq!(format_duration(0), "Just now");
    }

    #[test]
    fn negative_is_future() {
        let s = format_duration(-5);
        assert!(s.starts_with("After "));
        assert!(!s.ends_with(" ago"));
        assert_eq!(s, "After 5 seconds");
    }

    #[test]
    fn minute_and_seconds() {
        assert_eq!(format_duration(65), "1 minute 5 seconds ago");
    }

    #[test]
    fn exact_hour_has_no_filler_terms() {
        assert_eq!(format_duration(3600), "1 hour ago");
    }

    #[test]
    fn one_of_each_below_week() {
        assert_eq!(format_duration(90061), "1 day 1 hour 1 minute 1 second ago");
    }

    #[test]
    fn pluralizes_counts_above_one() {
        assert_eq!(format_duration(2 * DAY as i64 + 3 * HOUR as i64), "2 days 3 hours ago");
        assert_eq!(format_duration(1), "1 second ago");
    }

    #[test]
    fn weeks_months_years() {
        assert_eq!(format_duration(WEEK as i64), "1 week ago");
        assert_eq!(format_duration(MONTH as i64 + 2 * WEEK as i64), "1 month 2 weeks ago");
        assert_eq!(format_duration(2 * YEAR as i64), "2 years ago");
    }

    #[test]
    fn thirty_one_days_is_a_month_and_a_day() {
        assert_eq!(format_duration(31 * DAY as i64), "1 month 1 day ago");
    }

    #[test]
    fn future_multi_unit() {
        assert_eq!(format_duration(-(HOUR as i64 + 30 * MINUTE as i64)), "After 1 hour 30 minutes");
    }

    #[test]
    fn extreme_negative_does_not_overflow() {
        let s = format_duration(i64::MIN);
        assert!(s.starts_with("After "));
        assert!(s.ends_with(" seconds") || s.ends_with(" second"));
    }

    #[test]
    fn decompose_skips_zero_units() {
        assert_eq!(decompose(3600), vec![(TimeUnit::Hour, 1)]);
        assert!(decompose(0).is_empty());
    }

    #[test]
    fn units_are_largest_first() {
        assert!(UNITS.windows(2).all(|w| w[0].seconds() > w[1].seconds()));
    }
}
