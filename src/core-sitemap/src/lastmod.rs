//! Parsing and normalization of `<lastmod>` values.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::clock::Clock;

/// Date-time layouts without an offset. Interpreted in the clock's timezone.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts. Interpreted as midnight in the clock's timezone.
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y", "%B %d %Y"];

/// Date-time layouts that carry their own offset.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S %z", "%Y-%m-%dT%H:%M:%S%z"];

/// A validated last-modification instant.
///
/// Always later than the Unix epoch and expressed in the offset the parsing clock's
/// timezone has on that date. Displays as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LastModified(DateTime<FixedOffset>);

impl LastModified {
    /// Parses a free-form date or date-time string.
    ///
    /// `clock` anchors the relative words (`now`, `today`, `yesterday`, `tomorrow`) and
    /// supplies the timezone: inputs without an offset are read as wall-clock time there, and
    /// every result is expressed in that zone's offset for its own date. Returns `None` for
    /// anything unrecognized, and for instants at or before 1970-01-01T00:00:00Z.
    ///
    /// # Examples
    ///
    /// ```
    /// # use core_sitemap::{FixedClock, LastModified};
    /// let clock = FixedClock::parse("2024-03-01T12:00:00+00:00").unwrap();
    /// let lastmod = LastModified::parse("2016-09-10", &clock).unwrap();
    /// assert_eq!(lastmod.to_string(), "2016-09-10T00:00:00+00:00");
    /// assert!(LastModified::parse("not a date", &clock).is_none());
    /// ```
    pub fn parse<C: Clock + ?Sized>(raw: &str, clock: &C) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let parsed = relative(raw, clock)
            .or_else(|| unix_timestamp(raw, clock))
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .or_else(|_| DateTime::parse_from_rfc2822(raw))
                    .ok()
                    .or_else(|| {
                        OFFSET_DATETIME_FORMATS
                            .iter()
                            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
                    })
                    .map(|datetime| clock.to_local(&datetime.with_timezone(&Utc)))
            })
            .or_else(|| {
                NAIVE_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                    .and_then(|naive| clock.resolve_local(&naive))
            })
            .or_else(|| {
                NAIVE_DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                    .and_then(|date| midnight(date, clock))
            })?;

        Self::from_datetime(parsed)
    }

    /// Wraps an already-known instant. `None` if it is not after the Unix epoch.
    pub fn from_datetime(datetime: DateTime<FixedOffset>) -> Option<Self> {
        (datetime.timestamp() > 0).then_some(LastModified(datetime))
    }
}

impl std::fmt::Display for LastModified {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_w3c(&self.0))
    }
}

/// Formats an instant the way sitemap `<lastmod>` values are written: seconds precision and
/// a numeric offset (never `Z`).
pub fn format_w3c(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn relative<C: Clock + ?Sized>(raw: &str, clock: &C) -> Option<DateTime<FixedOffset>> {
    let now = clock.now();
    let today = now.date_naive();
    match raw.to_ascii_lowercase().as_str() {
        "now" => Some(now),
        "today" | "midnight" => midnight(today, clock),
        "yesterday" => midnight(today.checked_sub_days(Days::new(1))?, clock),
        "tomorrow" => midnight(today.checked_add_days(Days::new(1))?, clock),
        _ => None,
    }
}

fn unix_timestamp<C: Clock + ?Sized>(raw: &str, clock: &C) -> Option<DateTime<FixedOffset>> {
    let seconds = raw.strip_prefix('@')?.parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0).map(|utc| clock.to_local(&utc))
}

fn midnight<C: Clock + ?Sized>(date: NaiveDate, clock: &C) -> Option<DateTime<FixedOffset>> {
    clock.resolve_local(&date.and_hms_opt(0, 0, 0)?)
}
