//! Error types for sitemap generation.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sitemap generation operations.
///
/// Entry validation never produces one of these: invalid optional fields are dropped
/// and an empty location is ignored. Only configuration and I/O problems surface here.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Filesystem operation failed (listing, removing or writing a file)
    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Base URL is not an absolute URL
    #[error("Invalid base URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Per-file entry limit must be positive
    #[error("Invalid per-file entry limit: {0} (must be at least 1)")]
    InvalidLimit(usize),

    /// XML serialization failed
    #[error("XML serialization failed: {0}")]
    XmlError(String),

    /// Glob pattern error
    #[error("Glob pattern error: {0}")]
    GlobError(#[from] globset::Error),

    /// Configuration value could not be understood
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl SitemapError {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for Result with SitemapError
pub type Result<T> = std::result::Result<T, SitemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SitemapError::InvalidLimit(0);
        assert_eq!(error.to_string(), "Invalid per-file entry limit: 0 (must be at least 1)");

        let error = SitemapError::ConfigError("SITEMAP_LIMIT must be a number".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: SITEMAP_LIMIT must be a number");

        let error = SitemapError::io(
            "/tmp/out/sitemap1.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(error.to_string(), "I/O error on /tmp/out/sitemap1.xml: denied");
    }

    #[test]
    fn test_error_from_url_parse_error() {
        let url_result = url::Url::parse("not a valid url");
        assert!(url_result.is_err());

        let error: SitemapError = url_result.unwrap_err().into();
        assert!(matches!(error, SitemapError::UrlParseError(_)));
    }
}
