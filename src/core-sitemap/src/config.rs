//! Configuration options for sitemap generation.

use std::path::{Path, PathBuf};

use url::Url;

use crate::errors::{Result, SitemapError};
use crate::url_utils::trim_base_url;

/// The protocol maximum number of `<url>` nodes per sitemap file.
pub const DEFAULT_LIMIT: usize = 25000;

pub const DEFAULT_BASE_URL: &str = "https://example.com/";

pub const DEFAULT_TARGET: &str = "./";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "SITEMAP_BASE_URL";
/// Environment variable overriding the output directory.
pub const ENV_TARGET: &str = "SITEMAP_TARGET";
/// Environment variable overriding the per-file entry limit.
pub const ENV_LIMIT: &str = "SITEMAP_LIMIT";

/// Validated configuration for one sitemap target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapOptions {
    base_url: String,
    target: PathBuf,
    limit: usize,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            target: PathBuf::from(DEFAULT_TARGET),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SitemapOptions {
    /// Creates a new builder for SitemapOptions.
    pub fn builder() -> SitemapOptionsBuilder {
        SitemapOptionsBuilder::default()
    }

    /// The base URL exactly as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The base URL with trailing slashes removed, ready to have a path appended.
    pub fn trimmed_base_url(&self) -> &str {
        trim_base_url(&self.base_url)
    }

    /// Directory that is cleaned and written to.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Maximum number of entries per sitemap file. Always at least 1.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Builder for SitemapOptions.
#[derive(Debug, Clone, Default)]
pub struct SitemapOptionsBuilder {
    base_url: Option<String>,
    target: Option<PathBuf>,
    limit: Option<usize>,
}

impl SitemapOptionsBuilder {
    /// Starts a builder from the `SITEMAP_*` environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITEMAP_LIMIT` is set but is not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`SitemapOptionsBuilder::from_env`] but reads variables through `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let limit = match var(ENV_LIMIT) {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|e| SitemapError::ConfigError(format!("{ENV_LIMIT} must be a valid number ({raw:?}): {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            base_url: var(ENV_BASE_URL),
            target: var(ENV_TARGET).map(PathBuf::from),
            limit,
        })
    }

    /// Sets the base URL every location and index reference is prefixed with.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the output directory.
    pub fn target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Sets the maximum number of entries per sitemap file.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builds the SitemapOptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute URL or the limit is zero.
    pub fn build(self) -> Result<SitemapOptions> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)?;

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(SitemapError::InvalidLimit(limit));
        }

        Ok(SitemapOptions {
            base_url,
            target: self.target.unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET)),
            limit,
        })
    }
}
