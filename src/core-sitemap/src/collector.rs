//! Validation and in-order storage of sitemap entries.

use tracing::debug;

use crate::clock::Clock;
use crate::entry::{ChangeFrequency, Entry, Priority};
use crate::lastmod::LastModified;
use crate::url_utils::{absolute_url, trim_base_url};

/// Collects entries in insertion order. Duplicates are kept.
///
/// Validation is permissive: an invalid optional hint is dropped on its own and the entry is
/// still stored. Only an empty location rejects the entry.
#[derive(Debug)]
pub struct EntryCollector<C: Clock> {
    base_url: String,
    clock: C,
    entries: Vec<Entry>,
}

impl<C: Clock> EntryCollector<C> {
    pub fn new(base_url: &str, clock: C) -> Self {
        Self {
            base_url: trim_base_url(base_url).to_string(),
            clock,
            entries: Vec::new(),
        }
    }

    /// Validates and appends one entry. Returns `false` (and stores nothing) if `location` is empty.
    ///
    /// # Arguments
    ///
    /// * `location` - Path relative to the base URL, e.g. `/about.html`
    /// * `lastmod` - Any recognizable date or date-time
    /// * `changefreq` - One of `always`, `hourly`, `daily`, `weekly`, `monthly`, `yearly`, `never`
    /// * `priority` - Weight in `[0.0, 1.0]`
    pub fn add(
        &mut self,
        location: &str,
        lastmod: Option<&str>,
        changefreq: Option<&str>,
        priority: Option<f64>,
    ) -> bool {
        if location.is_empty() {
            debug!("Ignoring sitemap entry with an empty location");
            return false;
        }
        let loc = absolute_url(&self.base_url, location);

        let lastmod = lastmod.filter(|raw| !raw.is_empty()).and_then(|raw| {
            let parsed = LastModified::parse(raw, &self.clock);
            if parsed.is_none() {
                debug!("Dropping unrecognized lastmod {:?} for {}", raw, loc);
            }
            parsed
        });

        let changefreq = changefreq.filter(|raw| !raw.is_empty()).and_then(|raw| {
            let parsed = ChangeFrequency::parse(raw);
            if parsed.is_none() {
                debug!("Dropping unrecognized changefreq {:?} for {}", raw, loc);
            }
            parsed
        });

        let priority = priority.and_then(|raw| {
            let parsed = Priority::new(raw);
            if parsed.is_none() {
                debug!("Dropping out-of-range priority {} for {}", raw, loc);
            }
            parsed
        });

        self.entries.push(Entry::new(loc, lastmod, changefreq, priority));
        true
    }

    /// Appends an entry with no optional hints.
    pub fn add_location(&mut self, location: &str) -> bool {
        self.add(location, None, None, None)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every stored entry so the collector can be filled for a new run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
