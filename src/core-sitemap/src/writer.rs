//! Partitioning of entries into sitemap files and writing of the sitemap index.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cleanup::remove_stale_sitemaps;
use crate::clock::Clock;
use crate::config::SitemapOptions;
use crate::entry::Entry;
use crate::errors::{Result, SitemapError};
use crate::url_utils::absolute_url;
use crate::xml::{render_index, render_urlset};

/// Name of the index file. Also the name of the lone sitemap when only one is written.
pub const INDEX_FILE_NAME: &str = "sitemap.xml";

/// File name for a sitemap: `sitemap.xml` when unnumbered, `sitemapN.xml` otherwise.
pub fn sitemap_file_name(number: Option<usize>) -> String {
    match number {
        Some(n) => format!("sitemap{n}.xml"),
        None => INDEX_FILE_NAME.to_string(),
    }
}

/// What a generation run did to the target directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Stale `sitemap*.xml` files deleted before writing
    pub removed: Vec<PathBuf>,
    /// Sitemap files written, in batch order
    pub sitemaps: Vec<PathBuf>,
    /// Public URLs listed in the index (empty when no index was written)
    pub references: Vec<String>,
    /// Path of the index file, if one was written
    pub index: Option<PathBuf>,
}

/// Writes batches of entries as sitemap files, followed by an index when needed.
pub struct SitemapWriter<'a, C: Clock> {
    base_url: &'a str,
    target: &'a Path,
    limit: usize,
    clock: &'a C,
}

impl<'a, C: Clock> SitemapWriter<'a, C> {
    pub fn new(options: &'a SitemapOptions, clock: &'a C) -> Self {
        Self {
            base_url: options.trimmed_base_url(),
            target: options.target(),
            limit: options.limit(),
            clock,
        }
    }

    /// Cleans the target directory, then writes `entries` in batches of at most `limit`.
    ///
    /// Naming follows a lookahead rule evaluated just before each batch is written: if
    /// entries remain after this batch, or earlier batches were already referenced, the batch
    /// is numbered (`sitemap1.xml`, `sitemap2.xml`, ...) and its URL recorded for the index.
    /// Otherwise it is the only batch and is written unnumbered as `sitemap.xml` with no index.
    /// The unnumbered sitemap and the index therefore never coexist.
    ///
    /// With no entries, stale files are still removed but nothing is written.
    ///
    /// # Errors
    ///
    /// Stops at the first filesystem failure. Files already written stay on disk and no
    /// index is written.
    pub fn generate(&self, entries: &[Entry]) -> Result<GenerationReport> {
        let mut report = GenerationReport {
            removed: remove_stale_sitemaps(self.target)?,
            ..Default::default()
        };

        let mut written = 0;
        for batch in entries.chunks(self.limit) {
            written += batch.len();
            let remaining = entries.len() - written;
            let numbered = remaining > 0 || !report.references.is_empty();

            let file_name = sitemap_file_name(numbered.then_some(report.references.len() + 1));
            let path = self.target.join(&file_name);
            self.write_file(&path, &render_urlset(batch)?)?;
            info!("Wrote {} with {} entries", path.display(), batch.len());

            if numbered {
                report.references.push(absolute_url(self.base_url, &format!("/{file_name}")));
            }
            report.sitemaps.push(path);
        }

        if report.references.is_empty() {
            debug!("No sitemap index needed for {}", self.target.display());
        } else {
            let path = self.target.join(INDEX_FILE_NAME);
            let xml = render_index(&report.references, &self.clock.now())?;
            self.write_file(&path, &xml)?;
            info!("Wrote sitemap index {} referencing {} sitemaps", path.display(), report.references.len());
            report.index = Some(path);
        }

        Ok(report)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(|e| SitemapError::io(path, e))
    }
}
