//! A single `<url>` record and its optional crawl hints.

use crate::lastmod::LastModified;

/// How often the content at a location is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    /// The protocol token, e.g. `daily`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }

    /// Exact, case-sensitive match against the seven protocol tokens.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|freq| freq.as_str() == token)
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative crawl priority, held as tenths in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Validates and rounds a raw weight to the nearest tenth (halves round away from zero).
    ///
    /// The range check runs on the value scaled to tenths, so anything in `[0.0, 1.0]` is
    /// accepted while `1.01`, negatives and NaN are rejected.
    ///
    /// ```
    /// # use core_sitemap::Priority;
    /// assert_eq!(Priority::new(0.25).unwrap().to_string(), "0.3");
    /// assert_eq!(Priority::new(1.0).unwrap().to_string(), "1.0");
    /// assert!(Priority::new(1.5).is_none());
    /// ```
    pub fn new(value: f64) -> Option<Self> {
        let tenths = value * 10.0;
        if !tenths.is_finite() || !(0.0..=10.0).contains(&tenths) {
            return None;
        }
        Some(Priority(tenths.round() as u8))
    }
}

impl std::fmt::Display for Priority {
    /// Exactly one decimal digit.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// One validated sitemap URL record. Absent hints stay absent in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    loc: String,
    lastmod: Option<LastModified>,
    changefreq: Option<ChangeFrequency>,
    priority: Option<Priority>,
}

impl Entry {
    pub(crate) fn new(
        loc: String,
        lastmod: Option<LastModified>,
        changefreq: Option<ChangeFrequency>,
        priority: Option<Priority>,
    ) -> Self {
        Self {
            loc,
            lastmod,
            changefreq,
            priority,
        }
    }

    /// The absolute URL: base URL (trailing slashes removed) followed by the location.
    pub fn loc(&self) -> &str {
        &self.loc
    }

    pub fn lastmod(&self) -> Option<&LastModified> {
        self.lastmod.as_ref()
    }

    pub fn changefreq(&self) -> Option<ChangeFrequency> {
        self.changefreq
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_frequency_tokens() {
        for freq in ChangeFrequency::ALL {
            assert_eq!(ChangeFrequency::parse(freq.as_str()), Some(freq));
        }
        assert_eq!(ChangeFrequency::parse("Daily"), None);
        assert_eq!(ChangeFrequency::parse(" daily"), None);
        assert_eq!(ChangeFrequency::parse("fortnightly"), None);
        assert_eq!(ChangeFrequency::parse(""), None);
    }

    #[test]
    fn test_priority_bounds() {
        assert_eq!(Priority::new(0.0), Some(Priority(0)));
        assert_eq!(Priority::new(1.0), Some(Priority(10)));
        assert!(Priority::new(-0.1).is_none());
        assert!(Priority::new(1.01).is_none());
        assert!(Priority::new(1.5).is_none());
        assert!(Priority::new(f64::NAN).is_none());
        assert!(Priority::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_priority_rounds_to_one_decimal() {
        let cases = [
            (0.5, "0.5"),
            (0.7, "0.7"),
            (0.25, "0.3"),
            (0.15, "0.2"),
            (0.04, "0.0"),
            (0.96, "1.0"),
            (0.333, "0.3"),
        ];
        for (raw, expected) in cases {
            assert_eq!(Priority::new(raw).unwrap().to_string(), expected, "priority {raw}");
        }
    }
}
