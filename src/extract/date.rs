//! Publish date parsing
//!
//! Date strings come from arbitrary attribute values, so parsing is total:
//! anything that is not recognisably a timestamp becomes [`null_date`].
//! RFC 3339 / RFC 2822 are tried first; strings without an explicit offset
//! are interpreted in the local timezone.

use crate::model::null_date;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Formats carrying an explicit UTC offset
const OFFSET_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z", // 2014-12-15 22:29:25+00:00
    "%Y-%m-%dT%H:%M:%S%.f%z",  // 2014-12-15T22:29:25+0000
    "%Y-%m-%d %H:%M:%S%.f%z",  // 2014-12-15 22:29:25+0000
];

/// Date-time formats without an offset
const NAIVE_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f", // 2014-12-15T22:29:25
    "%Y-%m-%d %H:%M:%S%.f", // 2014-12-15 22:29:25
    "%Y-%m-%dT%H:%M",       // 2014-12-15T22:29
    "%Y-%m-%d %H:%M",       // 2014-12-15 22:29
];

/// Date-only formats, taken as local midnight
const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d",  // 2014-12-15
    "%Y/%m/%d",  // 2014/12/15
    "%d/%m/%Y",  // 15/12/2014
    "%b %e, %Y", // Dec 15, 2014
    "%B %e, %Y", // December 15, 2014
    "%e %b %Y",  // 15 Dec 2014
    "%e %B %Y",  // 15 December 2014
];

/// Parses a date string, falling back to [`null_date`]
///
/// # Example
///
/// ```
/// use press_harvest::extract::parse_date;
/// use press_harvest::null_date;
///
/// let date = parse_date("2014-12-15T22:29:25+00:00");
/// assert_eq!(date.to_rfc3339(), "2014-12-15T22:29:25+00:00");
/// assert_eq!(parse_date("entry-date published"), null_date());
/// ```
pub fn parse_date(raw: &str) -> DateTime<FixedOffset> {
    try_parse_date(raw).unwrap_or_else(null_date)
}

/// Parses a date string, returning `None` when it is not a timestamp
///
/// An empty string is not a timestamp.
pub fn try_parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date);
    }

    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date);
    }

    for pattern in OFFSET_PATTERNS {
        if let Ok(date) = DateTime::parse_from_str(raw, pattern) {
            return Some(date);
        }
    }

    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return in_local_timezone(naive);
        }
    }

    for pattern in DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, pattern) {
            return in_local_timezone(date.and_hms_opt(0, 0, 0)?);
        }
    }

    None
}

fn in_local_timezone(naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|date| date.fixed_offset())
}
