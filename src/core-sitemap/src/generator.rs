//! The [`Sitemap`] generator: collect entries, then write them out.

use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::collector::EntryCollector;
use crate::config::SitemapOptions;
use crate::entry::Entry;
use crate::errors::Result;
use crate::writer::{GenerationReport, SitemapWriter};

/// Collects sitemap entries for one target and generates the sitemap files.
///
/// Not meant to be shared between callers: use one instance per target directory.
///
/// # Examples
///
/// ```no_run
/// # use core_sitemap::{Sitemap, SitemapOptions};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = SitemapOptions::builder()
///     .base_url("https://www.example.com")
///     .target("public")
///     .limit(10000)
///     .build()?;
///
/// let mut sitemap = Sitemap::new(options);
/// sitemap.add_location("/index.html");
/// sitemap.add_location("/about.html");
/// sitemap.add("/news.html", Some("2016-09-10"), Some("daily"), Some(0.7));
/// let report = sitemap.generate()?;
/// println!("Wrote {} sitemap files", report.sitemaps.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Sitemap<C: Clock = SystemClock> {
    options: SitemapOptions,
    collector: EntryCollector<C>,
}

impl Sitemap<SystemClock> {
    pub fn new(options: SitemapOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> Sitemap<C> {
    /// Uses `clock` for index timestamps and for interpreting naive or relative lastmod values.
    pub fn with_clock(options: SitemapOptions, clock: C) -> Self {
        let collector = EntryCollector::new(options.base_url(), clock);
        Self { options, collector }
    }

    /// Validates and stores an entry. See [`EntryCollector::add`].
    pub fn add(
        &mut self,
        location: &str,
        lastmod: Option<&str>,
        changefreq: Option<&str>,
        priority: Option<f64>,
    ) -> bool {
        self.collector.add(location, lastmod, changefreq, priority)
    }

    /// Stores an entry with no optional hints.
    pub fn add_location(&mut self, location: &str) -> bool {
        self.collector.add_location(location)
    }

    pub fn entries(&self) -> &[Entry] {
        self.collector.entries()
    }

    /// Drops all collected entries.
    pub fn clear(&mut self) {
        self.collector.clear()
    }

    /// Removes stale `sitemap*.xml` files from the target, then writes the sitemap files and,
    /// when more than one was needed, the index.
    ///
    /// Collected entries are left in place, so calling this again rewrites the same output.
    /// Not atomic: a failure part way through leaves whatever was already written.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem or serialization failure.
    pub fn generate(&self) -> Result<GenerationReport> {
        let entries = self.collector.entries();
        info!(
            "Generating sitemaps for {} entries into {} (limit {} per file)",
            entries.len(),
            self.options.target().display(),
            self.options.limit()
        );

        let writer = SitemapWriter::new(&self.options, self.collector.clock());
        let report = writer.generate(entries)?;

        info!(
            "Sitemap generation finished: removed {} stale, wrote {} sitemaps, index {}",
            report.removed.len(),
            report.sitemaps.len(),
            if report.index.is_some() { "written" } else { "not needed" }
        );
        Ok(report)
    }
}
