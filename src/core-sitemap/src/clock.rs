//! Time source used for index timestamps and for interpreting last-modified values.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};

/// Supplies the current wall-clock time and the timezone that wall-clock readings belong to.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Resolves a wall-clock reading to an instant, using the zone's offset on that date.
    fn resolve_local(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>>;

    /// Expresses an instant in the zone's offset on that date.
    fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset>;
}

/// The local system clock and timezone, daylight saving included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    /// A reading inside a spring-forward gap is moved one hour later.
    fn resolve_local(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        Local
            .from_local_datetime(naive)
            .earliest()
            .or_else(|| Local.from_local_datetime(&(*naive + Duration::hours(1))).earliest())
            .map(|local| local.fixed_offset())
    }

    fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&Local).fixed_offset()
    }
}

/// A clock frozen at a single instant, in a zone with a constant offset. Makes generated
/// output reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parses an RFC 3339 timestamp, e.g. `2024-03-01T12:00:00+00:00`.
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }

    fn resolve_local(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        self.0.offset().from_local_datetime(naive).single()
    }

    fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(self.0.offset())
    }
}
