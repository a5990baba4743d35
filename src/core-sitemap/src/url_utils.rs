//! Base URL handling shared by entry locations and index references.

/// Strips every trailing `/` from a base URL.
///
/// ```
/// # use core_sitemap::url_utils::trim_base_url;
/// assert_eq!(trim_base_url("https://example.com///"), "https://example.com");
/// ```
pub fn trim_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Appends `path` verbatim to the base URL with its trailing slashes removed.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{}{}", trim_base_url(base_url), path)
}
