//! Removal of sitemap files left over from earlier runs.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use tracing::{info, warn};

use crate::errors::{Result, SitemapError};

/// File names considered generator output. Matches both `sitemap.xml` and `sitemapN.xml`.
pub const SITEMAP_FILE_PATTERN: &str = "sitemap*.xml";

/// Builds the matcher for [`SITEMAP_FILE_PATTERN`]. Matching is case-sensitive.
pub fn sitemap_file_matcher() -> Result<GlobMatcher> {
    Ok(Glob::new(SITEMAP_FILE_PATTERN)?.compile_matcher())
}

/// Deletes every file directly inside `target` whose name matches `sitemap*.xml`.
///
/// Subdirectories are not descended into, and a directory whose own name matches is left
/// alone. Returns the removed paths in sorted order.
///
/// # Errors
///
/// Returns an error if `target` cannot be listed or a matching file cannot be removed. Files
/// removed before the failure stay removed.
pub fn remove_stale_sitemaps(target: &Path) -> Result<Vec<PathBuf>> {
    let matcher = sitemap_file_matcher()?;

    let mut stale = Vec::new();
    for dir_entry in fs::read_dir(target).map_err(|e| SitemapError::io(target, e))? {
        let dir_entry = dir_entry.map_err(|e| SitemapError::io(target, e))?;
        if !matcher.is_match(Path::new(&dir_entry.file_name())) {
            continue;
        }
        let path = dir_entry.path();
        let file_type = dir_entry.file_type().map_err(|e| SitemapError::io(&path, e))?;
        if file_type.is_dir() {
            warn!("Not removing directory matching {}: {}", SITEMAP_FILE_PATTERN, path.display());
            continue;
        }
        stale.push(path);
    }
    stale.sort();

    for path in &stale {
        fs::remove_file(path).map_err(|e| SitemapError::io(path, e))?;
        info!("Removed stale sitemap file {}", path.display());
    }
    Ok(stale)
}
