//! # Sitemap Generation Library
//!
//! Collects URL entries and writes them out as sitemap XML files per the
//! [sitemaps.org protocol](https://www.sitemaps.org/protocol.html).
//!
//! ## Features
//!
//! - Permissive entry validation: invalid `lastmod`, `changefreq` or `priority` hints are
//!   dropped individually, only an empty location rejects an entry
//! - Free-form `lastmod` parsing, normalized to `YYYY-MM-DDTHH:MM:SS±HH:MM`
//! - Splitting across `sitemap1.xml`, `sitemap2.xml`, ... once the per-file limit is exceeded,
//!   with a `sitemap.xml` index referencing every file
//! - Removal of stale `sitemap*.xml` files before each run
//! - Injectable [`Clock`] for reproducible output
//!
//! ## Examples
//!
//! ```no_run
//! use core_sitemap::{Sitemap, SitemapOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = SitemapOptions::builder()
//!         .base_url("https://www.example.com")
//!         .target("../")
//!         .limit(10000)
//!         .build()?;
//!
//!     let mut sitemap = Sitemap::new(options);
//!     sitemap.add_location("/index.html");
//!     sitemap.add("/news.html", Some("2016-09-10"), Some("daily"), Some(0.7));
//!     sitemap.generate()?;
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod clock;
pub mod collector;
pub mod config;
mod entry;
mod errors;
mod generator;
mod lastmod;
pub mod logging;
pub mod url_utils;
pub mod writer;
pub mod xml;

// Public API re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use collector::EntryCollector;
pub use config::{DEFAULT_LIMIT, SitemapOptions, SitemapOptionsBuilder};
pub use entry::{ChangeFrequency, Entry, Priority};
pub use errors::{Result, SitemapError};
pub use generator::Sitemap;
pub use lastmod::LastModified;
pub use writer::{GenerationReport, INDEX_FILE_NAME, SitemapWriter};
